//! User registry tests against the in-memory store.

use common::{telemetry, ServiceConfig};
use domain::DomainError;
use user_service_lib::{SharedUserRegistry, UserRegistry};

fn setup() -> UserRegistry {
    telemetry::init_tracing(&ServiceConfig::default().with_service_name("user-service-test"));
    UserRegistry::new()
}

#[test]
fn test_add_user() {
    let mut registry = setup();

    registry.add("alice", "password123").unwrap();

    assert!(registry.contains("alice"));
    assert_eq!(
        registry.get("alice").unwrap().password.as_str(),
        "password123"
    );
}

#[test]
fn test_add_then_authenticate_for_many_users() {
    let mut registry = setup();
    let users: Vec<(String, String)> = (0..50)
        .map(|i| (format!("user_{}", i), format!("pass_{}", i)))
        .collect();

    for (username, password) in &users {
        registry.add(username, password).unwrap();
        assert!(registry.authenticate(username, password));
    }

    assert_eq!(registry.len(), users.len());
}

#[test]
fn test_add_existing_user() {
    let mut registry = setup();
    registry.add("bob", "password456").unwrap();

    let result = registry.add("bob", "newpassword");

    assert_eq!(result, Err(DomainError::duplicate_user("bob")));
    assert!(registry.authenticate("bob", "password456"));
    assert!(!registry.authenticate("bob", "newpassword"));
}

#[test]
fn test_authenticate() {
    let mut registry = setup();
    registry.add("charlie", "securepass").unwrap();

    assert!(registry.authenticate("charlie", "securepass"));
    assert!(!registry.authenticate("charlie", "wrongpass"));
    assert!(!registry.authenticate("david", "anypass"));
}

#[test]
fn test_authenticate_is_exact() {
    let mut registry = setup();
    registry.add("charlie", "securepass").unwrap();

    assert!(!registry.authenticate("charlie", "SECUREPASS"));
    assert!(!registry.authenticate("charlie", "securepass "));
    assert!(!registry.authenticate("Charlie", "securepass"));
    assert!(!registry.authenticate("charlie", ""));
}

#[test]
fn test_empty_password_is_stored_verbatim() {
    let mut registry = setup();
    registry.add("blank", "").unwrap();

    assert!(registry.authenticate("blank", ""));
    assert!(!registry.authenticate("blank", " "));
}

#[test]
fn test_remove_user() {
    let mut registry = setup();
    registry.add("eve", "evepass").unwrap();

    registry.remove("eve").unwrap();

    assert!(!registry.contains("eve"));
    assert!(!registry.authenticate("eve", "evepass"));
}

#[test]
fn test_remove_nonexistent_user() {
    let mut registry = setup();

    let result = registry.remove("nonexistent");

    assert_eq!(result, Err(DomainError::user_not_found("nonexistent")));
}

#[test]
fn test_remove_twice() {
    let mut registry = setup();
    registry.add("system_user", "syspass").unwrap();

    assert!(registry.remove("system_user").is_ok());
    assert!(matches!(
        registry.remove("system_user"),
        Err(DomainError::UserNotFound(_))
    ));
}

#[test]
fn test_username_can_be_reused_after_remove() {
    let mut registry = setup();
    registry.add("frank", "old").unwrap();
    registry.remove("frank").unwrap();

    registry.add("frank", "new").unwrap();

    assert!(registry.authenticate("frank", "new"));
    assert!(!registry.authenticate("frank", "old"));
}

#[test]
fn test_registries_are_independent() {
    let mut first = setup();
    let second = UserRegistry::new();

    first.add("alice", "pw").unwrap();

    assert!(first.authenticate("alice", "pw"));
    assert!(!second.authenticate("alice", "pw"));
}

#[test]
fn test_shared_registry_matches_plain_behavior() {
    let registry = SharedUserRegistry::new();

    registry.add("grace", "pw").unwrap();
    assert_eq!(
        registry.add("grace", "other"),
        Err(DomainError::duplicate_user("grace"))
    );
    assert!(registry.authenticate("grace", "pw"));
    registry.remove("grace").unwrap();
    assert!(registry.is_empty());
}
