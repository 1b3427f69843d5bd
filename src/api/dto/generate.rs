//! DTOs for token generation endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validators;

/// Request to issue a tracking token.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateTokenRequest {
    /// Destination the tracking link redirects to (must be HTTP/HTTPS).
    #[validate(custom(function = validate_target_url))]
    pub target_url: String,

    /// Optional recipient email recorded alongside the token.
    #[validate(custom(function = validate_email))]
    pub email: Option<String>,

    /// Optional campaign label (falls back to `"default"` when omitted).
    pub campaign: Option<String>,
}

fn validate_target_url(url: &str) -> Result<(), ValidationError> {
    if validators::validate_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Invalid URL format".into()))
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if validators::validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}

/// Response for a newly issued token.
#[derive(Debug, Serialize)]
pub struct GenerateTokenResponse {
    pub token: String,
    pub tracker_url: String,
    pub target_url: String,
    pub campaign: String,
}
