use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AuthzError;
use crate::model::Role;

/// Identity as declared by the external provider.
///
/// Opaque to the engine except for the optional `role` attribute, which
/// is validated against the closed role set during resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free-form role attribute; anything outside the closed role set
    /// resolves to viewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Provider-specific attributes, carried opaquely.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub attributes: Value,
}

impl Identity {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            display_name: None,
            role: None,
            attributes: Value::Null,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Identity supplier seam for pluggable session providers.
///
/// The engine consumes exactly this one external capability. Errors are
/// recovered by the resolver (fail closed to viewer), so implementors
/// should report failures rather than retrying internally.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the identity of the current caller context.
    async fn fetch_current_identity(&self) -> Result<Identity, AuthzError>;
}

/// Provider answering every fetch with a fixed identity. Used in tests
/// and local development.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    identity: Identity,
}

impl StaticIdentityProvider {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Fresh identity declaring `role`.
    pub fn with_role(role: Role) -> Self {
        Self::new(Identity::new(Uuid::new_v4()).with_role(role.as_str()))
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn fetch_current_identity(&self) -> Result<Identity, AuthzError> {
        Ok(self.identity.clone())
    }
}
