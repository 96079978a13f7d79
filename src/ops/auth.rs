use std::sync::LazyLock;

use regex::Regex;

use crate::model::user::User;

/// Error type for the mocked auth flow
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Sign-in failure never says which half was wrong
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("sign-up rejected: {}", .0.join("; "))]
    SignUpRejected(Vec<String>),
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Linear scan for an exact email + password match
pub fn sign_in<'a>(users: &'a [User], email: &str, password: &str) -> Result<&'a User, AuthError> {
    users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(AuthError::InvalidCredentials)
}

/// The fields a sign-up form submits
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Validate a sign-up form against the registered users. All field
/// violations are collected and reported together.
pub fn validate_sign_up(form: &SignUpForm, users: &[User]) -> Result<User, AuthError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    if !EMAIL_RE.is_match(&form.email) {
        errors.push("enter a valid email".to_string());
    } else if users.iter().any(|u| u.email == form.email) {
        errors.push("email is already registered".to_string());
    }
    if form.password.is_empty() {
        errors.push("password is required".to_string());
    }
    if form.password != form.confirm {
        errors.push("passwords do not match".to_string());
    }

    if errors.is_empty() {
        Ok(User {
            name: form.name.trim().to_string(),
            email: form.email.clone(),
            password: form.password.clone(),
        })
    } else {
        Err(AuthError::SignUpRejected(errors))
    }
}
