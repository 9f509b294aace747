use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::auth::repo::User;
use crate::error::ApiError;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Trims and lowercases where appropriate, then checks every field.
    pub fn normalize_and_validate(&mut self) -> Result<(), ApiError> {
        self.username = self.username.trim().to_string();
        self.email = self.email.trim().to_lowercase();

        let username_len = self.username.chars().count();
        if username_len < 3 || username_len > 50 {
            return Err(ApiError::validation_with_detail(
                "Invalid request data",
                "Username must be between 3 and 50 characters long",
            ));
        }
        if !USERNAME_RE.is_match(&self.username) {
            return Err(ApiError::validation_with_detail(
                "Invalid request data",
                "Username can only contain letters, numbers and underscores",
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(ApiError::validation_with_detail(
                "Invalid request data",
                "Invalid email format",
            ));
        }
        if self.password.len() < 6 {
            return Err(ApiError::validation_with_detail(
                "Invalid request data",
                "Password must be at least 6 characters long",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Public part of the user returned to clients. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
