use std::env;

use thiserror::Error;

/// Environment variable holding the Aviationstack API key.
pub const API_KEY_VAR: &str = "AVIATIONSTACK_API_KEY";

/// Value shipped in .env.example before the operator fills in a real key.
const PLACEHOLDER: &str = "PASTE_AVIATIONSTACK_KEY_HERE";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing AVIATIONSTACK_API_KEY. Please check your .env file and replace the placeholder.")]
    MissingApiKey,
}

/// Retrieves the Aviationstack API key from the environment variables.
///
/// ## Returns
///
/// A Result containing the API key, or an `AuthError` when the variable is
/// absent, empty, or still set to the placeholder.
pub fn aviation_api_key() -> Result<String, AuthError> {
    validate_key(env::var(API_KEY_VAR).ok())
}

fn validate_key(value: Option<String>) -> Result<String, AuthError> {
    match value {
        Some(key) if !key.is_empty() && key != PLACEHOLDER => Ok(key),
        _ => Err(AuthError::MissingApiKey),
    }
}

/// Shortens the key to its first 4 characters followed by an ellipsis,
/// for operator confirmation without exposing the secret.
pub fn redact(key: &str) -> String {
    format!("{}...", key.chars().take(4).collect::<String>())
}
