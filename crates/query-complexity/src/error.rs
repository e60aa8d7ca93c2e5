/// The access control policy attached to a request could not be read.
#[derive(Debug, thiserror::Error)]
pub enum PolicyParseError {
    #[error("Policy definition is not valid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Policy definition must be a JSON object")]
    NotAnObject,
}
