use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::errors::{AuthzError, AuthzResult};
use crate::model::{Action, Module, Role};

/// Immutable `Role x Module -> Set<Action>` table.
///
/// Constructed once through [`PermissionMatrixBuilder`], which enforces
/// the completeness invariant: every `(role, module)` pair has an entry,
/// possibly empty, never absent. After construction the matrix is pure
/// data and safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct PermissionMatrix {
    grants: HashMap<(Role, Module), HashSet<Action>>,
}

impl PermissionMatrix {
    pub fn builder() -> PermissionMatrixBuilder {
        PermissionMatrixBuilder::default()
    }

    /// The actions `role` is granted on `module`.
    ///
    /// Total: a missing entry would be a construction bug, and is
    /// answered with the shared empty set rather than a panic.
    pub fn lookup(&self, role: Role, module: Module) -> &HashSet<Action> {
        static EMPTY: OnceLock<HashSet<Action>> = OnceLock::new();
        self.grants
            .get(&(role, module))
            .unwrap_or_else(|| EMPTY.get_or_init(HashSet::new))
    }

    pub fn allows(&self, role: Role, module: Module, action: Action) -> bool {
        self.lookup(role, module).contains(&action)
    }

    /// The built-in policy table, constructed and validated once per
    /// process. A completeness failure here is a packaging bug and
    /// halts initialization.
    pub fn default_policy() -> &'static PermissionMatrix {
        static MATRIX: OnceLock<PermissionMatrix> = OnceLock::new();
        MATRIX.get_or_init(|| {
            builtin_policy().expect("built-in permission matrix must define every role/module pair")
        })
    }
}

/// Builder collecting grants before the completeness check.
///
/// Repeated grants for the same `(role, module)` pair are merged.
#[derive(Debug, Default)]
pub struct PermissionMatrixBuilder {
    grants: HashMap<(Role, Module), HashSet<Action>>,
}

impl PermissionMatrixBuilder {
    pub fn grant(
        mut self,
        role: Role,
        module: Module,
        actions: impl IntoIterator<Item = Action>,
    ) -> Self {
        self.grants
            .entry((role, module))
            .or_default()
            .extend(actions);
        self
    }

    /// Validate completeness and freeze the table.
    ///
    /// Fails with [`AuthzError::Configuration`] naming every missing
    /// `(role, module)` pair. A missing entry is a policy gap; it must
    /// halt startup, never silently default.
    pub fn build(self) -> AuthzResult<PermissionMatrix> {
        let mut missing = Vec::new();
        for role in Role::ALL {
            for module in Module::ALL {
                if !self.grants.contains_key(&(role, module)) {
                    missing.push(format!("{role}/{module}"));
                }
            }
        }

        if !missing.is_empty() {
            return Err(AuthzError::configuration(format!(
                "permission matrix missing entries: {}",
                missing.join(", ")
            )));
        }

        Ok(PermissionMatrix {
            grants: self.grants,
        })
    }
}

/// The shipping policy for the dashboard.
///
/// Grants are explicit per pair; `manage` never implies the other
/// actions. Roles below admin get no `manage` anywhere.
fn builtin_policy() -> AuthzResult<PermissionMatrix> {
    use Action::{AiSuggestions, Create, Delete, Edit, Export, View};

    let mut builder = PermissionMatrix::builder();

    // admin: full control of every module, manage included.
    for module in Module::ALL {
        builder = builder.grant(Role::Admin, module, Action::ALL);
    }

    // department_head: full operational control, no manage; settings
    // and users are deliberately narrower.
    builder = builder
        .grant(Role::DepartmentHead, Module::Dashboard, [View, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::AiVision, [View, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Fleet, [View, Create, Edit, Delete, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Waste, [View, Create, Edit, Delete, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Utilities, [View, Create, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Security, [View, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Hospital, [View, Create, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Reports, [View, Create, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Settings, [View, Edit])
        .grant(Role::DepartmentHead, Module::Users, [View, Create, Edit])
        .grant(Role::DepartmentHead, Module::Alerts, [View, Create, Edit, Delete, Export])
        .grant(Role::DepartmentHead, Module::Maps, [View, Export])
        .grant(Role::DepartmentHead, Module::Iot, [View, Create, Edit, Export, AiSuggestions])
        .grant(Role::DepartmentHead, Module::Assets, [View, Create, Edit, Delete, Export]);

    // supervisor: shift-level oversight; no settings access at all.
    builder = builder
        .grant(Role::Supervisor, Module::Dashboard, [View, Export])
        .grant(Role::Supervisor, Module::AiVision, [View, AiSuggestions])
        .grant(Role::Supervisor, Module::Fleet, [View, Create, Edit, Export, AiSuggestions])
        .grant(Role::Supervisor, Module::Waste, [View, Create, Edit, Export])
        .grant(Role::Supervisor, Module::Utilities, [View, Edit, Export])
        .grant(Role::Supervisor, Module::Security, [View, Export])
        .grant(Role::Supervisor, Module::Hospital, [View, Edit, Export])
        .grant(Role::Supervisor, Module::Reports, [View, Export])
        .grant(Role::Supervisor, Module::Settings, [])
        .grant(Role::Supervisor, Module::Users, [View])
        .grant(Role::Supervisor, Module::Alerts, [View, Create, Edit])
        .grant(Role::Supervisor, Module::Maps, [View])
        .grant(Role::Supervisor, Module::Iot, [View, Edit])
        .grant(Role::Supervisor, Module::Assets, [View, Create, Edit]);

    // operator: day-to-day data entry on field modules.
    builder = builder
        .grant(Role::Operator, Module::Dashboard, [View])
        .grant(Role::Operator, Module::AiVision, [View])
        .grant(Role::Operator, Module::Fleet, [View, Create, Edit])
        .grant(Role::Operator, Module::Waste, [View, Create])
        .grant(Role::Operator, Module::Utilities, [View])
        .grant(Role::Operator, Module::Security, [View])
        .grant(Role::Operator, Module::Hospital, [View])
        .grant(Role::Operator, Module::Reports, [View])
        .grant(Role::Operator, Module::Settings, [])
        .grant(Role::Operator, Module::Users, [])
        .grant(Role::Operator, Module::Alerts, [View, Create])
        .grant(Role::Operator, Module::Maps, [View])
        .grant(Role::Operator, Module::Iot, [View])
        .grant(Role::Operator, Module::Assets, [View]);

    // viewer: read-only on the public modules, locked out elsewhere.
    builder = builder
        .grant(Role::Viewer, Module::Dashboard, [View])
        .grant(Role::Viewer, Module::AiVision, [])
        .grant(Role::Viewer, Module::Fleet, [View])
        .grant(Role::Viewer, Module::Waste, [View])
        .grant(Role::Viewer, Module::Utilities, [View])
        .grant(Role::Viewer, Module::Security, [])
        .grant(Role::Viewer, Module::Hospital, [])
        .grant(Role::Viewer, Module::Reports, [View])
        .grant(Role::Viewer, Module::Settings, [])
        .grant(Role::Viewer, Module::Users, [])
        .grant(Role::Viewer, Module::Alerts, [View])
        .grant(Role::Viewer, Module::Maps, [View])
        .grant(Role::Viewer, Module::Iot, [])
        .grant(Role::Viewer, Module::Assets, [View]);

    builder.build()
}
