//! Session bootstrap - identity resolution and per-context state
//!
//! A [`Session`] starts pending and is transitioned to ready exactly
//! once by the [`SessionResolver`], which owns the mutation; every
//! other component only reads. Resolution fails closed: any provider
//! error, timeout, or invalid role attribute resolves to the
//! lowest-privilege role rather than surfacing an error to callers.

mod provider;
mod resolver;

pub use provider::{Identity, IdentityProvider, StaticIdentityProvider};
pub use resolver::{ResolverConfig, SessionResolver};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::model::Role;

/// Per caller-context session handle.
///
/// Cheap to clone; clones share the same write-once cell, so a
/// transition performed through any handle is visible to all of them.
/// Readers before the transition observe pending; readers after it
/// observe the resolved role, never a half-written value.
#[derive(Debug, Clone, Default)]
pub struct Session {
    resolved: Arc<OnceCell<ResolvedSession>>,
}

impl Session {
    /// A fresh, unresolved session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match self.resolved.get() {
            Some(resolved) => SessionState::Ready(resolved.role),
            None => SessionState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.resolved.get().is_none()
    }

    /// The resolved role, or `None` while the session is pending.
    pub fn role(&self) -> Option<Role> {
        self.resolved.get().map(|resolved| resolved.role)
    }

    /// The provider identity, if resolution succeeded in fetching one.
    pub fn identity(&self) -> Option<&Identity> {
        self.resolved.get().and_then(|resolved| resolved.identity.as_ref())
    }

    pub fn outcome(&self) -> Option<ResolutionOutcome> {
        self.resolved.get().map(|resolved| resolved.outcome)
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved.get().map(|resolved| resolved.resolved_at)
    }
}

/// Observable session state.
///
/// The transient `failed` condition is never observable: a failed fetch
/// resolves to `Ready(Viewer)` in the same transition, with the cause
/// preserved in [`ResolutionOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Pending,
    Ready(Role),
}

/// Terminal state stored by the single pending -> ready transition.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSession {
    /// Identity as returned by the provider; absent when the fetch
    /// failed or timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub role: Role,
    pub outcome: ResolutionOutcome,
    pub resolved_at: DateTime<Utc>,
}

/// How the session's role was determined.
///
/// Every outcome other than `Declared` resolves to [`Role::Viewer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// The identity carried a recognized role attribute.
    Declared,
    /// The identity carried no role attribute.
    MissingRoleAttribute,
    /// The identity's role attribute is outside the closed role set.
    UnknownRoleAttribute,
    /// The provider returned an error.
    ProviderFailed,
    /// The fetch exceeded the configured timeout.
    TimedOut,
}
