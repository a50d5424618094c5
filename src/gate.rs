use crate::engine::DecisionEngine;
use crate::model::{Action, Module, Role};
use crate::session::Session;

/// Three-state visibility decision handed to the UI layer.
///
/// `Pending` means the session is unresolved; callers hide or show a
/// placeholder rather than briefly flashing privileged content. A
/// `Deny` never distinguishes "you lack permission" from "we couldn't
/// verify your permission" - both render the caller-supplied fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Pending,
    Allow,
    Deny,
}

impl Decision {
    pub fn is_pending(self) -> bool {
        self == Decision::Pending
    }

    pub fn is_allow(self) -> bool {
        self == Decision::Allow
    }

    pub fn is_deny(self) -> bool {
        self == Decision::Deny
    }
}

/// Gating primitives consumed by the UI layer.
///
/// Pure decision functions; rendering for each of the three decision
/// states is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    engine: DecisionEngine<'a>,
}

impl<'a> Gate<'a> {
    pub fn new(engine: DecisionEngine<'a>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> DecisionEngine<'a> {
        self.engine
    }

    /// Visibility of a module/action-gated region.
    pub fn evaluate(&self, session: &Session, module: Module, action: Action) -> Decision {
        match session.role() {
            None => Decision::Pending,
            Some(role) => {
                if self.engine.has_permission(role, module, action) {
                    Decision::Allow
                } else {
                    Decision::Deny
                }
            }
        }
    }

    /// Visibility based on role-set membership, independent of the
    /// matrix.
    pub fn evaluate_for_roles(&self, session: &Session, allowed: &[Role]) -> Decision {
        match session.role() {
            None => Decision::Pending,
            Some(role) => {
                if allowed.contains(&role) {
                    Decision::Allow
                } else {
                    tracing::debug!(role = %role, allowed = ?allowed, "role not in allowed set");
                    Decision::Deny
                }
            }
        }
    }
}

impl Gate<'static> {
    /// Gate over the built-in policy table.
    pub fn with_default_policy() -> Self {
        Self::new(DecisionEngine::with_default_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionResolver, StaticIdentityProvider};

    #[tokio::test]
    async fn pending_session_gates_to_pending() {
        let gate = Gate::with_default_policy();
        let session = Session::new();

        let decision = gate.evaluate(&session, Module::Fleet, Action::View);
        assert!(decision.is_pending());

        let decision = gate.evaluate_for_roles(&session, &[Role::Admin]);
        assert!(decision.is_pending());
    }

    #[tokio::test]
    async fn resolved_session_gates_against_the_matrix() {
        let gate = Gate::with_default_policy();
        let session = Session::new();
        SessionResolver::new(StaticIdentityProvider::with_role(Role::Operator))
            .resolve(&session)
            .await;

        assert!(gate.evaluate(&session, Module::Fleet, Action::Create).is_allow());
        assert!(gate.evaluate(&session, Module::Settings, Action::View).is_deny());
    }

    #[tokio::test]
    async fn role_set_membership_is_exact() {
        let gate = Gate::with_default_policy();
        let session = Session::new();
        SessionResolver::new(StaticIdentityProvider::with_role(Role::Supervisor))
            .resolve(&session)
            .await;

        // supervisor outranks operator, but membership is not a
        // hierarchy check
        assert!(gate
            .evaluate_for_roles(&session, &[Role::Admin, Role::DepartmentHead])
            .is_deny());
        assert!(gate
            .evaluate_for_roles(&session, &[Role::Supervisor])
            .is_allow());
    }
}
