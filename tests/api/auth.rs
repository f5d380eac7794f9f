use budgetwise::model::auth::{LoginRequest, RegistrationRole, Role, SignupRequest};

use super::*;

fn credentials() -> LoginRequest {
    LoginRequest {
        username: TEST_USERNAME.to_string(),
        password: "secret".to_string(),
    }
}

fn signup(roles: Vec<RegistrationRole>) -> SignupRequest {
    SignupRequest {
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: "secret".to_string(),
        roles,
    }
}

/// Tests signing in with accepted credentials.
///
/// Verifies that the sign-in response is normalized into a session carrying the
/// token, identity and mapped roles.
///
/// Expected: Ok with a session for the test account holding the user role
#[tokio::test]
async fn sign_in_returns_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_signin_endpoint(&["ROLE_USER"])
        .build()
        .await?;

    let result = test.public_api().sign_in(&credentials()).await;

    assert!(result.is_ok());
    let session = result.unwrap();
    assert_eq!(session.token(), TEST_TOKEN);
    assert_eq!(session.username(), TEST_USERNAME);
    assert_eq!(session.email(), TEST_EMAIL);
    assert_eq!(session.id(), Some(TEST_USER_ID));
    assert!(session.has_role(Role::User));
    assert!(!session.is_admin());

    test.assert_mocks();

    Ok(())
}

/// Tests signing in as an administrator.
///
/// Expected: Ok with a session holding both roles
#[tokio::test]
async fn sign_in_maps_admin_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_signin_endpoint(&["ROLE_USER", "ROLE_ADMIN"])
        .build()
        .await?;

    let session = test.public_api().sign_in(&credentials()).await.unwrap();

    assert!(session.is_admin());
    assert!(session.has_role(Role::User));

    test.assert_mocks();

    Ok(())
}

/// Tests signing in with rejected credentials.
///
/// Verifies that the backend's message is surfaced as-is, without the status code.
///
/// Expected: Err(AuthenticationFailed) carrying the backend message
#[tokio::test]
async fn sign_in_rejection_carries_backend_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_signin_rejection(401, "Bad credentials")
        .build()
        .await?;

    let result = test.public_api().sign_in(&credentials()).await;

    assert_eq!(
        result,
        Err(Error::AuthenticationFailed("Bad credentials".to_string()))
    );
    assert_eq!(result.unwrap_err().user_message(), "Bad credentials");

    test.assert_mocks();

    Ok(())
}

/// Tests a successful registration.
///
/// Expected: Ok(()) after exactly one sign-up request
#[tokio::test]
async fn sign_up_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_signup_endpoint(200, "User registered successfully!", 1)
        .build()
        .await?;

    let result = test
        .public_api()
        .sign_up(&signup(vec![RegistrationRole::User]))
        .await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}

/// Tests registering a username that is already taken.
///
/// Verifies that the status and message of the 400 response are both kept.
///
/// Expected: Err(RegistrationFailed) with status 400 and the backend message
#[tokio::test]
async fn sign_up_conflict_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_signup_endpoint(400, "Error: Username is already taken!", 1)
        .build()
        .await?;

    let result = test
        .public_api()
        .sign_up(&signup(vec![RegistrationRole::User]))
        .await;

    assert_eq!(
        result,
        Err(Error::RegistrationFailed {
            status: 400,
            message: "Error: Username is already taken!".to_string(),
        })
    );

    test.assert_mocks();

    Ok(())
}

/// Tests that admin registration requests the admin role.
///
/// Expected: Ok(()) with the request body listing the `admin` role
#[tokio::test]
async fn admin_sign_up_sends_admin_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/auth/signup")
                .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                    "username": TEST_USERNAME,
                    "role": ["admin"],
                })))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"message":"User registered successfully!"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = test
        .public_api()
        .sign_up(&signup(vec![RegistrationRole::Admin]))
        .await;

    assert_eq!(result, Ok(()));

    test.assert_mocks();

    Ok(())
}
