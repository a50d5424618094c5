use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Identity class controlling baseline privilege level.
///
/// Variants are declared in ascending privilege order so the derived
/// `Ord` is the hierarchy order: `admin > department_head > supervisor
/// > operator > viewer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Viewer,
    Operator,
    Supervisor,
    DepartmentHead,
    Admin,
}

impl Role {
    /// Every role, lowest privilege first.
    pub const ALL: [Role; 5] = [
        Role::Viewer,
        Role::Operator,
        Role::Supervisor,
        Role::DepartmentHead,
        Role::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Operator => "operator",
            Role::Supervisor => "supervisor",
            Role::DepartmentHead => "department_head",
            Role::Admin => "admin",
        }
    }

    /// Parse a provider-declared role attribute. Anything outside the
    /// closed set is invalid; callers fail closed to [`Role::Viewer`].
    pub fn from_attribute(value: &str) -> Option<Role> {
        match value {
            "viewer" => Some(Role::Viewer),
            "operator" => Some(Role::Operator),
            "supervisor" => Some(Role::Supervisor),
            "department_head" => Some(Role::DepartmentHead),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// True iff `self` ranks at or above `threshold` in the role
    /// hierarchy. Total over the closed role set.
    pub fn at_least(self, threshold: Role) -> bool {
        self >= threshold
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// MODULE
// =============================================================================

/// Functional area of the dashboard subject to independent access
/// control. Closed set, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Dashboard,
    AiVision,
    Fleet,
    Waste,
    Utilities,
    Security,
    Hospital,
    Reports,
    Settings,
    Users,
    Alerts,
    Maps,
    Iot,
    Assets,
}

impl Module {
    /// Every module in the fixed enumeration order used for stable
    /// listings (navigation, menus, `accessible_modules`).
    pub const ALL: [Module; 14] = [
        Module::Dashboard,
        Module::AiVision,
        Module::Fleet,
        Module::Waste,
        Module::Utilities,
        Module::Security,
        Module::Hospital,
        Module::Reports,
        Module::Settings,
        Module::Users,
        Module::Alerts,
        Module::Maps,
        Module::Iot,
        Module::Assets,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::AiVision => "ai_vision",
            Module::Fleet => "fleet",
            Module::Waste => "waste",
            Module::Utilities => "utilities",
            Module::Security => "security",
            Module::Hospital => "hospital",
            Module::Reports => "reports",
            Module::Settings => "settings",
            Module::Users => "users",
            Module::Alerts => "alerts",
            Module::Maps => "maps",
            Module::Iot => "iot",
            Module::Assets => "assets",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ACTION
// =============================================================================

/// Operation kind gated per module.
///
/// `Manage` is reserved for full administrative control of a module; it
/// does not imply the other actions. Every grant is listed explicitly
/// in the matrix, no implicit escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Export,
    AiSuggestions,
    Manage,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::View,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Export,
        Action::AiSuggestions,
        Action::Manage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::AiSuggestions => "ai_suggestions",
            Action::Manage => "manage",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
