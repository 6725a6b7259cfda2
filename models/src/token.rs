use crate::{Metadata, ModelError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /tokens` on the secure host.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub card_number: String,
    pub cvv: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub email: String,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Default)]
pub struct TokenRequestBuilder {
    card_number: Option<String>,
    cvv: Option<String>,
    expiration_month: Option<u8>,
    expiration_year: Option<u16>,
    email: Option<String>,
    metadata: Metadata,
}

impl TokenRequestBuilder {
    pub fn with_card_number(mut self, card_number: impl Into<String>) -> Self {
        self.card_number = Some(card_number.into());
        self
    }

    pub fn with_cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    pub fn with_expiration(mut self, month: u8, year: u16) -> Self {
        self.expiration_month = Some(month);
        self.expiration_year = Some(year);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<TokenRequest, ModelError> {
        let card_number: String = self
            .card_number
            .ok_or_else(|| ModelError::validation("Card number is required"))?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if !(13..=19).contains(&card_number.len()) || !card_number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ModelError::validation("Card number must be 13-19 digits"));
        }

        let cvv = self
            .cvv
            .ok_or_else(|| ModelError::validation("CVV is required"))?;

        if !(3..=4).contains(&cvv.len()) || !cvv.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::validation("CVV must be 3 or 4 digits"));
        }

        let month = self
            .expiration_month
            .ok_or_else(|| ModelError::validation("Expiration month is required"))?;

        if !(1..=12).contains(&month) {
            return Err(ModelError::validation(format!(
                "Invalid expiration month: {month}"
            )));
        }

        let year = self
            .expiration_year
            .ok_or_else(|| ModelError::validation("Expiration year is required"))?;

        if year < 1000 {
            return Err(ModelError::validation(format!(
                "Expiration year must have four digits: {year}"
            )));
        }

        let email = self
            .email
            .ok_or_else(|| ModelError::validation("Email is required"))?;

        if !email.contains('@') {
            return Err(ModelError::validation(format!("Invalid email: {email}")));
        }

        Ok(TokenRequest {
            card_number,
            cvv,
            expiration_month: format!("{month:02}"),
            expiration_year: year.to_string(),
            email,
            metadata: self.metadata,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Token {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default, rename = "type")]
    pub token_type: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub creation_date: i64,
    /// Masked PAN as returned by Culqi, e.g. `411111******1111`.
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub last_four: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub iin: Option<Value>,
    #[serde(default)]
    pub client: Option<Value>,
    #[serde(default)]
    pub metadata: Metadata,
}
