use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use validator::{Validate, ValidationError};

#[derive(Error, Debug, PartialEq)]
pub enum AuthServiceError {
    #[error("Please enter email and password")]
    MissingCredentials,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Validation error: {message}")]
    ValidationFailed { message: String },
}

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 6 {
        return Err(ValidationError::new("password_too_short"));
    }
    Ok(())
}

/// Sign-in form input. Validation is syntactic only; there is no credential
/// store behind it, so any well-formed input signs in.
#[derive(Debug, Validate, Deserialize)]
pub struct SignInRequest {
    #[validate(regex(path = "EMAIL_REGEX", message = "Invalid email format"))]
    pub email: String,

    #[validate(custom = "validate_password")]
    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An authenticated session for the current run. Held in memory only and
/// discarded when the flow exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInSession {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the sign-in form and open a session. Checks run in the
    /// same order the form reports them: missing fields, then email shape,
    /// then password length.
    pub fn sign_in(&self, request: SignInRequest) -> Result<SignInSession, AuthServiceError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            warn!("sign-in rejected: missing credentials");
            return Err(AuthServiceError::MissingCredentials);
        }

        if let Err(errors) = request.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("email") {
                warn!("sign-in rejected: malformed email '{}'", request.email);
                return Err(AuthServiceError::InvalidEmail);
            }
            if fields.contains_key("password") {
                warn!("sign-in rejected: password too short");
                return Err(AuthServiceError::PasswordTooShort);
            }
            return Err(AuthServiceError::ValidationFailed {
                message: errors.to_string(),
            });
        }

        let session = SignInSession {
            email: request.email,
            signed_in_at: Utc::now(),
        };
        info!("user {} signed in", session.email);
        Ok(session)
    }
}
