#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No active record matches the requested id. The id is kept as the raw
    /// path segment so unparseable ids are reported the same way.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}
