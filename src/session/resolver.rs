use std::sync::OnceLock;
use std::time::Duration;

use chrono::Utc;

use super::provider::IdentityProvider;
use super::{ResolutionOutcome, ResolvedSession, Session};
use crate::model::Role;

const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 5_000;

/// Resolver tuning, read from the environment once per process.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Upper bound on the identity fetch. A hung provider call resolves
    /// to viewer instead of leaving callers pending forever.
    pub resolve_timeout: Duration,
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        static CONFIG: OnceLock<ResolverConfig> = OnceLock::new();
        *CONFIG.get_or_init(|| {
            let timeout_ms = std::env::var("AUTHZ_RESOLVE_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RESOLVE_TIMEOUT_MS);
            ResolverConfig {
                resolve_timeout: Duration::from_millis(timeout_ms),
            }
        })
    }
}

/// Obtains the caller's role once per session lifetime.
///
/// The resolver is the single writer of session state. Concurrent
/// `resolve` calls coalesce on the session's write-once cell: the
/// provider is queried at most once per session, exactly one
/// pending -> ready transition occurs, and a session that is already
/// ready is answered from the stored state without re-fetching.
/// Re-authentication requires a new [`Session`].
pub struct SessionResolver<P> {
    provider: P,
    timeout: Duration,
}

impl<P: IdentityProvider> SessionResolver<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            timeout: ResolverConfig::from_env().resolve_timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the session, returning its role.
    ///
    /// Never fails: a provider error, an elapsed timeout, a missing
    /// role attribute, or a role attribute outside the closed set all
    /// resolve to [`Role::Viewer`].
    ///
    /// Dropping this future while the fetch is in flight cancels the
    /// fetch and leaves the session pending; no decision is finalized
    /// for a torn-down context.
    pub async fn resolve(&self, session: &Session) -> Role {
        let resolved = session
            .resolved
            .get_or_init(|| self.resolve_identity())
            .await;
        resolved.role
    }

    async fn resolve_identity(&self) -> ResolvedSession {
        let fetched =
            tokio::time::timeout(self.timeout, self.provider.fetch_current_identity()).await;

        let (identity, role, outcome) = match fetched {
            Ok(Ok(identity)) => {
                let declared = identity.role.clone();
                match declared.as_deref() {
                    Some(attribute) => match Role::from_attribute(attribute) {
                        Some(role) => (Some(identity), role, ResolutionOutcome::Declared),
                        None => {
                            tracing::warn!(
                                role = %attribute,
                                "unrecognized role attribute, resolving to viewer"
                            );
                            (
                                Some(identity),
                                Role::Viewer,
                                ResolutionOutcome::UnknownRoleAttribute,
                            )
                        }
                    },
                    None => (
                        Some(identity),
                        Role::Viewer,
                        ResolutionOutcome::MissingRoleAttribute,
                    ),
                }
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "identity fetch failed, resolving to viewer");
                (None, Role::Viewer, ResolutionOutcome::ProviderFailed)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "identity fetch timed out, resolving to viewer"
                );
                (None, Role::Viewer, ResolutionOutcome::TimedOut)
            }
        };

        tracing::debug!(role = %role, outcome = ?outcome, "session resolved");

        ResolvedSession {
            identity,
            role,
            outcome,
            resolved_at: Utc::now(),
        }
    }
}
