//! Admin login and registration.
//!
//! The email allow-list below is a convenience check that spares a round trip; it is
//! not an access control. The backend alone decides who gets a token.

use crate::config::ADMIN_EMAIL;
use crate::data::Credentials;
use crate::errors::AuthError;
use crate::service::PortfolioService;
use crate::session::AdminToken;

pub const LOGIN_SUCCESS: &str = "✓ Login successful! Redirecting to dashboard...";
pub const LOGIN_FAILED: &str = "Error logging in";
pub const REGISTER_FAILED: &str = "Error registering";
pub const REGISTER_NOT_FOUND: &str =
    "Register endpoint not found. Is the backend running and URL correct?";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn check_allowed(email: &str) -> Result<(), AuthError> {
    if email == ADMIN_EMAIL {
        Ok(())
    } else {
        Err(AuthError::EmailNotAllowed)
    }
}

/// Exchanges the credentials for a bearer token.
pub async fn login<S>(service: &S, form: &LoginForm) -> Result<AdminToken, AuthError>
where
    S: PortfolioService + ?Sized,
{
    check_allowed(&form.email)?;

    let response = service
        .login(&Credentials {
            email: form.email.clone(),
            password: form.password.clone(),
        })
        .await?;

    AdminToken::parse(response.token).ok_or(AuthError::MissingToken)
}

pub async fn register<S>(service: &S, form: &RegisterForm) -> Result<(), AuthError>
where
    S: PortfolioService + ?Sized,
{
    check_allowed(&form.email)?;
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    service
        .register(&Credentials {
            email: form.email.clone(),
            password: form.password.clone(),
        })
        .await?;
    Ok(())
}

pub fn login_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Api(api) => api.server_message().unwrap_or(LOGIN_FAILED).to_string(),
        other => other.to_string(),
    }
}

pub fn register_error_message(error: &AuthError) -> String {
    match error {
        AuthError::Api(api) if api.status() == Some(404) => REGISTER_NOT_FOUND.to_string(),
        AuthError::Api(api) => match api.server_message() {
            Some(message) => format!("Server error ({}): {message}", api.status().unwrap_or(500)),
            None => REGISTER_FAILED.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockService};

    fn login_form(email: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn register_form(email: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            email: email.to_string(),
            password: "hunter2".to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn login_rejects_other_emails_without_a_request() {
        let service = MockService::new();

        let error = login(&service, &login_form("someone@else.com"))
            .await
            .unwrap_err();

        assert!(service.calls().is_empty());
        assert_eq!(
            login_error_message(&error),
            "Only authorized email can access the admin dashboard"
        );
    }

    #[tokio::test]
    async fn login_returns_issued_token() {
        let service = MockService::new();

        let token = login(&service, &login_form(ADMIN_EMAIL)).await.unwrap();

        assert_eq!(token.as_str(), "issued-token");
        assert!(matches!(&service.calls()[0], Call::Login(c) if c.email == ADMIN_EMAIL));
    }

    #[tokio::test]
    async fn login_failure_prefers_server_message() {
        let service = MockService::failing(401, Some("Invalid credentials"));
        let error = login(&service, &login_form(ADMIN_EMAIL)).await.unwrap_err();
        assert_eq!(login_error_message(&error), "Invalid credentials");

        let service = MockService::failing(500, None);
        let error = login(&service, &login_form(ADMIN_EMAIL)).await.unwrap_err();
        assert_eq!(login_error_message(&error), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn register_checks_passwords_before_sending() {
        let service = MockService::new();

        let error = register(&service, &register_form(ADMIN_EMAIL, "nope"))
            .await
            .unwrap_err();

        assert!(matches!(error, AuthError::PasswordMismatch));
        assert_eq!(register_error_message(&error), "Passwords do not match");
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn register_distinguishes_missing_endpoint() {
        let service = MockService::failing(404, Some("Cannot POST"));
        let error = register(&service, &register_form(ADMIN_EMAIL, "hunter2"))
            .await
            .unwrap_err();
        assert_eq!(register_error_message(&error), REGISTER_NOT_FOUND);
        assert_eq!(service.calls().len(), 1);
    }

    #[tokio::test]
    async fn register_reports_status_with_server_message() {
        let service = MockService::failing(409, Some("Admin already exists"));
        let error = register(&service, &register_form(ADMIN_EMAIL, "hunter2"))
            .await
            .unwrap_err();
        assert_eq!(
            register_error_message(&error),
            "Server error (409): Admin already exists"
        );

        let service = MockService::failing(500, None);
        let error = register(&service, &register_form(ADMIN_EMAIL, "hunter2"))
            .await
            .unwrap_err();
        assert_eq!(register_error_message(&error), REGISTER_FAILED);
    }
}
