#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid vocabulary pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
