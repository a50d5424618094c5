use crate::matrix::PermissionMatrix;
use crate::model::{Action, Module, Role};

/// Pure decision functions over a permission matrix and the role
/// hierarchy.
///
/// No I/O, no mutation; every method is total over the closed
/// enumerations and safe to call from any number of concurrent
/// contexts.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine<'a> {
    matrix: &'a PermissionMatrix,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(matrix: &'a PermissionMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &'a PermissionMatrix {
        self.matrix
    }

    pub fn has_permission(&self, role: Role, module: Module, action: Action) -> bool {
        let granted = self.matrix.allows(role, module, action);
        if !granted {
            tracing::debug!(
                role = %role,
                module = %module,
                action = %action,
                "permission denied"
            );
        }
        granted
    }

    /// True iff `role` has at least one action on `module`.
    pub fn can_access_module(&self, role: Role, module: Module) -> bool {
        !self.matrix.lookup(role, module).is_empty()
    }

    pub fn is_admin(&self, role: Role) -> bool {
        role == Role::Admin
    }

    pub fn is_at_least_department_head(&self, role: Role) -> bool {
        role.at_least(Role::DepartmentHead)
    }

    pub fn can_use_ai(&self, role: Role, module: Module) -> bool {
        self.has_permission(role, module, Action::AiSuggestions)
    }

    /// Every module `role` can access, in the fixed enumeration order
    /// of [`Module::ALL`]. Stable and repeatable, independent of any
    /// runtime collection order.
    pub fn accessible_modules(&self, role: Role) -> Vec<Module> {
        Module::ALL
            .into_iter()
            .filter(|module| self.can_access_module(role, *module))
            .collect()
    }
}

impl DecisionEngine<'static> {
    /// Engine over the built-in policy table.
    pub fn with_default_policy() -> Self {
        Self::new(PermissionMatrix::default_policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_checks() {
        let engine = DecisionEngine::with_default_policy();
        assert!(engine.is_admin(Role::Admin));
        assert!(!engine.is_admin(Role::DepartmentHead));

        assert!(engine.is_at_least_department_head(Role::Admin));
        assert!(engine.is_at_least_department_head(Role::DepartmentHead));
        assert!(!engine.is_at_least_department_head(Role::Supervisor));
    }

    #[test]
    fn module_access_follows_matrix() {
        let engine = DecisionEngine::with_default_policy();
        assert!(engine.can_access_module(Role::Viewer, Module::Dashboard));
        assert!(!engine.can_access_module(Role::Viewer, Module::Settings));
    }

    #[test]
    fn ai_gate_is_the_ai_suggestions_action() {
        let engine = DecisionEngine::with_default_policy();
        assert!(engine.can_use_ai(Role::Supervisor, Module::AiVision));
        // operator may view ai_vision but has no ai_suggestions grant
        assert!(engine.has_permission(Role::Operator, Module::AiVision, Action::View));
        assert!(!engine.can_use_ai(Role::Operator, Module::AiVision));
    }

    #[test]
    fn accessible_modules_preserves_enumeration_order() {
        let engine = DecisionEngine::with_default_policy();
        let modules = engine.accessible_modules(Role::Viewer);
        let mut sorted = modules.clone();
        sorted.sort();
        assert_eq!(modules, sorted);
        assert!(!modules.contains(&Module::Settings));
    }
}
