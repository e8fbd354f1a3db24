//! Contact form stub. Submissions are validated and logged, never stored or sent.

use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: String,
    pub message: String,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    Form(request): Form<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    validate_contact(&request)?;

    let name = request.name.trim();
    info!(
        "Contact form submission from {} <{}> ({} chars)",
        name,
        request.email.trim(),
        request.message.trim().chars().count()
    );

    Ok(Json(ContactResponse {
        status: "received".to_string(),
        message: format!("Thank you, {name}! Your message has been received."),
    }))
}

fn validate_contact(request: &ContactRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let email = request.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("email must be a valid address".to_string()));
    }
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_contact(&request("Sam", "sam@example.com", "Hi")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_contact(&request("  ", "sam@example.com", "Hi")).is_err());
    }

    #[test]
    fn test_email_without_at_rejected() {
        assert!(validate_contact(&request("Sam", "sam.example.com", "Hi")).is_err());
    }

    #[test]
    fn test_blank_message_rejected() {
        assert!(validate_contact(&request("Sam", "sam@example.com", "\n")).is_err());
    }
}
