pub type AuthzResult<T> = Result<T, AuthzError>;

#[derive(thiserror::Error, Debug)]
pub enum AuthzError {
    /// The permission table failed its completeness check. Fatal at
    /// startup; never defaulted over.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The identity provider could not produce an identity. Recovered
    /// by the session resolver (fail closed to viewer), never surfaced
    /// to gating callers.
    #[error("identity provider error: {0}")]
    Provider(String),
}

impl AuthzError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }
}
