//! Domain types and pure logic for the idol service.
//!
//! Nothing in this crate performs I/O; persistence lives in `idol-db` and
//! the HTTP surface in `idol-api`.

pub mod error;
pub mod idol;
pub mod types;
