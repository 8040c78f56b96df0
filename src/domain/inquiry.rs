use serde::Serialize;
use thiserror::Error;

use crate::domain::locale::Locale;
use crate::domain::selection::ConfirmedStay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InquiryError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Contact fields typed into the inquiry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Body sent to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,
}

impl InquiryPayload {
    pub fn new(
        form: InquiryForm,
        stay: Option<&ConfirmedStay>,
        locale: Locale,
    ) -> Result<Self, InquiryError> {
        let name = required(form.name, "name")?;
        let email = required(form.email, "email")?;
        let phone = required(form.phone, "phone")?;
        let message = required(form.message, "message")?;
        if !looks_like_email(&email) {
            return Err(InquiryError::InvalidEmail(email));
        }

        Ok(Self {
            name,
            email,
            phone,
            message,
            check_in_date: stay.map(|stay| locale.format_long_date(stay.check_in)),
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, InquiryError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InquiryError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
