//! End-to-end session behaviour against the demo directory.
//!
//! Runs on `ManualClock`, so the simulated network delay costs nothing.

use pretty_assertions::assert_eq;
use saarthi_auth::{AuthError, Clock, Directory, ManualClock, SessionStore, SignupRequest};
use saarthi_core::{Destination, Role, RoleProfile, SessionPhase};

fn store() -> SessionStore<ManualClock> {
    let clock = ManualClock::default();
    SessionStore::new(Directory::demo(clock.now()), clock)
}

fn demo_email(role: Role) -> &'static str {
    match role {
        Role::Patient => "patient@demo.com",
        Role::Doctor => "doctor@demo.com",
        Role::Pharmacy => "pharmacy@demo.com",
        Role::Admin => "admin@demo.com",
    }
}

#[tokio::test]
async fn demo_login_succeeds_for_any_password() {
    for role in Role::ALL {
        for password in ["", "x", "correct horse battery staple"] {
            let mut store = store();
            let expected = store.directory().lookup(demo_email(role)).cloned().unwrap();

            let identity = store
                .login(demo_email(role), password, role)
                .await
                .expect("matching role should log in")
                .clone();

            assert_eq!(identity, expected);
            assert_eq!(store.identity(), Some(&expected));
            assert!(store.is_authenticated());
        }
    }
}

#[tokio::test]
async fn demo_login_with_wrong_role_fails_without_state_change() {
    for registered in Role::ALL {
        for requested in Role::ALL.into_iter().filter(|r| *r != registered) {
            let mut store = store();
            store.select_role(requested);
            let before = store.state().clone();

            let err = store
                .login(demo_email(registered), "pw", requested)
                .await
                .unwrap_err();

            assert_eq!(
                err,
                AuthError::RoleMismatch {
                    email: demo_email(registered).to_string(),
                    requested,
                    registered,
                }
            );
            assert!(store.identity().is_none());
            assert_eq!(store.state(), &before);
        }
    }
}

#[tokio::test]
async fn failed_login_keeps_previous_identity() {
    let mut store = store();
    store
        .login("patient@demo.com", "pw", Role::Patient)
        .await
        .unwrap();

    let result = store.login("admin@demo.com", "pw", Role::Patient).await;

    assert!(result.is_err());
    assert_eq!(store.identity().unwrap().email, "patient@demo.com");
}

#[tokio::test]
async fn unknown_email_synthesizes_identity_for_requested_role() {
    for role in Role::ALL {
        let mut store = store();
        let identity = store
            .login("priya.sharma@example.org", "anything", role)
            .await
            .unwrap()
            .clone();

        assert_eq!(identity.role, role);
        assert_eq!(identity.email, "priya.sharma@example.org");
        assert_eq!(identity.name, "priya.sharma");
        assert!(identity.id.starts_with("user-"));
        assert_eq!(identity.health_id.is_some(), role == Role::Patient);
        assert!(identity.phone.is_none());
    }
}

#[tokio::test]
async fn admin_example() {
    let mut store = store();
    let identity = store.login("admin@demo.com", "x", Role::Admin).await.unwrap();
    assert_eq!(identity.name, "Admin User");
    assert_eq!(identity.role, Role::Admin);
}

#[tokio::test]
async fn signup_always_succeeds_with_supplied_fields() {
    for role in Role::ALL {
        let mut store = store();
        let identity = store
            .signup(SignupRequest::new(
                "new.user@clinic.in",
                "pw",
                "New User",
                "+919876543210",
                role,
            ))
            .await
            .clone();

        assert_eq!(identity.email, "new.user@clinic.in");
        assert_eq!(identity.name, "New User");
        assert_eq!(identity.phone.as_deref(), Some("+919876543210"));
        assert_eq!(identity.role, role);
        assert_eq!(identity.health_id.is_some(), role == Role::Patient);
        assert_eq!(store.identity(), Some(&identity));
    }
}

#[tokio::test]
async fn signup_ignores_existing_directory_entries() {
    let mut store = store();
    let identity = store
        .signup(SignupRequest::new(
            "doctor@demo.com",
            "pw",
            "Impostor",
            "",
            Role::Admin,
        ))
        .await
        .clone();

    assert_eq!(identity.name, "Impostor");
    assert_eq!(identity.role, Role::Admin);
    assert_ne!(identity.id, "d1");
}

#[tokio::test]
async fn signup_keeps_matching_role_profile() {
    let mut store = store();
    let profile = RoleProfile::Doctor {
        specialization: "Cardiology".into(),
        license_number: "MCI-77".into(),
        hospital_name: None,
    };
    let identity = store
        .signup(
            SignupRequest::new("dr.k@clinic.in", "pw", "Dr. K", "+91", Role::Doctor)
                .with_profile(profile.clone()),
        )
        .await;

    assert_eq!(identity.profile.as_ref(), Some(&profile));
}

#[tokio::test]
async fn logout_resets_everything_and_is_idempotent() {
    let mut store = store();
    store.select_role(Role::Pharmacy);
    store
        .login("pharmacy@demo.com", "pw", Role::Pharmacy)
        .await
        .unwrap();

    store.logout();
    assert!(store.identity().is_none());
    assert!(store.pending_role().is_none());
    assert_eq!(store.phase(), SessionPhase::Anonymous);

    store.logout();
    assert_eq!(store.phase(), SessionPhase::Anonymous);
    assert_eq!(store.destination(), Destination::Welcome);
}

#[tokio::test]
async fn full_state_machine_walk() {
    let mut store = store();
    assert_eq!(store.destination(), Destination::Welcome);

    store.select_role(Role::Patient);
    assert_eq!(store.destination(), Destination::Auth);

    store.select_role(Role::Doctor);
    assert_eq!(store.phase(), SessionPhase::RoleChosen(Role::Doctor));

    store
        .login("doctor@demo.com", "pw", Role::Doctor)
        .await
        .unwrap();
    assert_eq!(store.destination(), Destination::Dashboard(Role::Doctor));

    store
        .signup(SignupRequest::new("p@x.in", "pw", "P", "1", Role::Patient))
        .await;
    assert_eq!(store.destination(), Destination::Dashboard(Role::Patient));

    store.logout();
    assert_eq!(store.destination(), Destination::Welcome);
}

#[tokio::test]
async fn empty_directory_synthesizes_every_login() {
    let clock = ManualClock::default();
    let mut store = SessionStore::new(Directory::empty(), clock);

    let identity = store
        .login("admin@demo.com", "x", Role::Patient)
        .await
        .unwrap();

    assert_eq!(identity.role, Role::Patient);
    assert_eq!(identity.name, "admin");
}
