use super::*;

// =============================================================
// classify_signup_response
// =============================================================

#[test]
fn signup_created_is_success() {
    assert_eq!(classify_signup_response(201, r#"{"message":"User created successfully"}"#), Ok(()));
    assert_eq!(classify_signup_response(201, ""), Ok(()));
}

#[test]
fn signup_rejection_surfaces_server_message() {
    assert_eq!(
        classify_signup_response(400, r#"{"message":"Email already exists"}"#),
        Err(SubmitError::Validation("Email already exists".to_owned()))
    );
}

#[test]
fn signup_rejection_without_message_is_generic() {
    assert_eq!(classify_signup_response(400, r#"{"error":"nope"}"#), Err(SubmitError::Generic));
    assert_eq!(classify_signup_response(502, "<html>Bad Gateway</html>"), Err(SubmitError::Generic));
    assert_eq!(classify_signup_response(500, ""), Err(SubmitError::Generic));
}

#[test]
fn signup_other_success_status_is_generic() {
    assert_eq!(classify_signup_response(200, r#"{"message":"ok"}"#), Err(SubmitError::Generic));
}

// =============================================================
// classify_login_response
// =============================================================

#[test]
fn login_ok_extracts_token() {
    assert_eq!(classify_login_response(200, r#"{"access_token":"abc"}"#), Ok("abc".to_owned()));
}

#[test]
fn login_ok_without_token_is_generic() {
    assert_eq!(classify_login_response(200, "{}"), Err(SubmitError::Generic));
    assert_eq!(classify_login_response(200, r#"{"access_token":""}"#), Err(SubmitError::Generic));
}

#[test]
fn login_unauthorized_surfaces_message() {
    assert_eq!(
        classify_login_response(401, r#"{"message":"Invalid credentials"}"#),
        Err(SubmitError::Validation("Invalid credentials".to_owned()))
    );
}

// =============================================================
// Error text and wire format
// =============================================================

#[test]
fn generic_error_displays_fixed_message() {
    assert_eq!(SubmitError::Generic.to_string(), GENERIC_ERROR_MESSAGE);
    assert_eq!(SubmitError::Validation("x".to_owned()).to_string(), "x");
}

#[test]
fn credentials_serialize_as_email_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&creds).unwrap(), serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}
