mod support;

use httpmock::prelude::*;
use pm_client::{ApiError, LoginCredentials, RegisterDraft, Role};
use serde_json::json;

fn login_credentials() -> LoginCredentials {
    LoginCredentials {
        email: "a@b.com".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn login_stores_canonical_profile_then_logout_clears_it() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(json!({
            "token": "t1",
            "id": "u1",
            "fullName": "Ann",
            "email": "a@b.com",
            "role": "moderator"
        }));
    });

    let harness = support::harness(&server.base_url());
    let payload = harness
        .session
        .login(&login_credentials())
        .await
        .expect("login succeeds");

    assert_eq!(payload.token, "t1");
    assert!(harness.session.is_authenticated());

    let user = harness.session.current_user().expect("profile stored");
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Role::Moderator);

    harness.session.logout();
    assert!(!harness.session.is_authenticated());
    assert!(harness.session.current_user().is_none());
}

#[tokio::test]
async fn register_accepts_short_name_spelling_and_signs_in() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/auth/register");
        then.status(200).json_body(json!({
            "token": "t2",
            "id": "u2",
            "name": "Bob",
            "email": "b@c.com",
            "role": "user"
        }));
    });

    let harness = support::harness(&server.base_url());
    let draft = RegisterDraft {
        full_name: "Bob Example".to_string(),
        email: "b@c.com".to_string(),
        password: "secret1".to_string(),
        role: Role::User,
    };

    harness
        .session
        .register(&draft)
        .await
        .expect("register succeeds");

    let user = harness.session.current_user().expect("profile stored");
    assert_eq!(user.name, "Bob");
    assert_eq!(user.role, Role::User);
    assert_eq!(harness.session.token().as_deref(), Some("t2"));
}

#[tokio::test]
async fn later_calls_attach_the_stored_bearer_token() {
    let server = MockServer::start();
    let _login = server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(json!({
            "token": "t1",
            "id": "u1",
            "fullName": "Ann",
            "email": "a@b.com",
            "role": "user"
        }));
    });
    let tasks = server.mock(|when, then| {
        when.method(GET)
            .path("/tasks/my-tasks")
            .header("authorization", "Bearer t1");
        then.status(200).json_body(json!([]));
    });

    let harness = support::harness(&server.base_url());
    harness
        .session
        .login(&login_credentials())
        .await
        .expect("login succeeds");

    let body: serde_json::Value = harness
        .api
        .get("/tasks/my-tasks")
        .await
        .expect("authenticated call succeeds");
    assert_eq!(body, json!([]));
    tasks.assert();
}

#[tokio::test]
async fn absent_credential_sends_no_authorization_header() {
    let server = MockServer::start();
    let open = server.mock(|when, then| {
        when.method(GET).path("/health").matches(|req| {
            req.headers
                .as_ref()
                .map(|headers| {
                    !headers
                        .iter()
                        .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                })
                .unwrap_or(true)
        });
        then.status(200).json_body(json!({"status": "ok"}));
    });

    let harness = support::harness(&server.base_url());
    let body: serde_json::Value = harness.api.get("/health").await.expect("call succeeds");
    assert_eq!(body["status"], "ok");
    open.assert();
}

#[tokio::test]
async fn validation_failure_short_circuits_before_any_network_call() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(200).json_body(json!({}));
    });

    let harness = support::harness(&server.base_url());
    let err = harness
        .session
        .login(&LoginCredentials {
            email: "a@b.com".to_string(),
            password: String::new(),
        })
        .await
        .expect_err("validation rejects");

    assert!(matches!(err, ApiError::ValidationFailed(_)));
    assert_eq!(err.to_string(), "Password is required");
    assert_eq!(login.hits(), 0);
}

#[tokio::test]
async fn failed_login_propagates_the_server_message_unchanged() {
    let server = MockServer::start();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/auth/login");
        then.status(500)
            .json_body(json!({"message": "Invalid email or password"}));
    });

    let harness = support::harness(&server.base_url());
    let err = harness
        .session
        .login(&login_credentials())
        .await
        .expect_err("login fails");

    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!harness.session.is_authenticated());
    assert!(harness.navigator.redirects().is_empty());
}
