use cityscope_authz::{
    Action, DecisionEngine, Gate, Module, Role, Session, SessionResolver, StaticIdentityProvider,
};

#[test]
fn operator_may_create_fleet_records() {
    let engine = DecisionEngine::with_default_policy();
    assert!(engine.has_permission(Role::Operator, Module::Fleet, Action::Create));
}

#[test]
fn operator_has_no_settings_permissions() {
    let engine = DecisionEngine::with_default_policy();
    assert!(!engine.has_permission(Role::Operator, Module::Settings, Action::View));
    assert!(!engine.can_access_module(Role::Operator, Module::Settings));
}

#[test]
fn viewer_cannot_access_ai_vision() {
    let engine = DecisionEngine::with_default_policy();
    assert!(!engine.can_access_module(Role::Viewer, Module::AiVision));
    for action in Action::ALL {
        assert!(!engine.has_permission(Role::Viewer, Module::AiVision, action));
    }
}

#[test]
fn admin_sees_every_module_in_enumeration_order() {
    let engine = DecisionEngine::with_default_policy();
    assert_eq!(engine.accessible_modules(Role::Admin), Module::ALL.to_vec());
}

#[tokio::test]
async fn supervisor_is_denied_by_head_only_role_set() {
    let gate = Gate::with_default_policy();
    let session = Session::new();
    SessionResolver::new(StaticIdentityProvider::with_role(Role::Supervisor))
        .resolve(&session)
        .await;

    let decision = gate.evaluate_for_roles(&session, &[Role::Admin, Role::DepartmentHead]);
    assert!(decision.is_deny());
}

#[test]
fn hierarchy_spot_checks() {
    assert!(Role::Admin.at_least(Role::Viewer));
    assert!(!Role::Viewer.at_least(Role::Admin));
    for role in Role::ALL {
        assert!(role.at_least(role));
    }

    let engine = DecisionEngine::with_default_policy();
    assert!(engine.is_at_least_department_head(Role::Admin));
    assert!(!engine.is_at_least_department_head(Role::Operator));
    assert!(engine.is_admin(Role::Admin));
    assert!(!engine.is_admin(Role::Viewer));
}

#[test]
fn decisions_are_idempotent() {
    let engine = DecisionEngine::with_default_policy();
    for role in Role::ALL {
        for module in Module::ALL {
            for action in Action::ALL {
                let first = engine.has_permission(role, module, action);
                let second = engine.has_permission(role, module, action);
                assert_eq!(first, second, "{role}/{module}/{action}");
            }
            assert_eq!(
                engine.accessible_modules(role),
                engine.accessible_modules(role)
            );
        }
    }
}

#[test]
fn ai_capability_requires_an_explicit_grant() {
    let engine = DecisionEngine::with_default_policy();
    // department_head has ai_suggestions on fleet, viewer nowhere
    assert!(engine.can_use_ai(Role::DepartmentHead, Module::Fleet));
    for module in Module::ALL {
        assert!(!engine.can_use_ai(Role::Viewer, module));
    }
}
