use crate::{Currency, Metadata, ModelError};

use serde::{Deserialize, Serialize};
use serde_json::Value;

const MAX_DESCRIPTION_LEN: usize = 80;

/// Customer data Culqi uses for fraud scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntifraudDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Body of `POST /charges`.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    /// Amount in minor units (céntimos).
    pub amount: u64,
    pub currency_code: Currency,
    pub email: String,
    /// Token (`tkn_...`) or card (`crd_...`) id.
    pub source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antifraud_details: Option<AntifraudDetails>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

#[derive(Debug, Default)]
pub struct ChargeRequestBuilder {
    amount: Option<u64>,
    currency_code: Currency,
    email: Option<String>,
    source_id: Option<String>,
    capture: Option<bool>,
    description: Option<String>,
    installments: Option<u32>,
    antifraud_details: Option<AntifraudDetails>,
    metadata: Metadata,
}

impl ChargeRequestBuilder {
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency_code = currency;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    /// `false` authorizes only; the charge must be captured later.
    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = Some(capture);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_installments(mut self, installments: u32) -> Self {
        self.installments = Some(installments);
        self
    }

    pub fn with_antifraud_details(mut self, details: AntifraudDetails) -> Self {
        self.antifraud_details = Some(details);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[track_caller]
    pub fn build(self) -> Result<ChargeRequest, ModelError> {
        let amount = self
            .amount
            .ok_or_else(|| ModelError::validation("Amount is required"))?;

        if amount == 0 {
            return Err(ModelError::validation("Amount must be greater than zero"));
        }

        let email = self
            .email
            .ok_or_else(|| ModelError::validation("Email is required"))?;

        if !email.contains('@') {
            return Err(ModelError::validation(format!("Invalid email: {email}")));
        }

        let source_id = self
            .source_id
            .ok_or_else(|| ModelError::validation("Source id is required"))?;

        if source_id.is_empty() {
            return Err(ModelError::validation("Source id cannot be empty"));
        }

        if let Some(description) = &self.description
            && description.chars().count() > MAX_DESCRIPTION_LEN
        {
            return Err(ModelError::validation(format!(
                "Description exceeds {MAX_DESCRIPTION_LEN} characters"
            )));
        }

        if self.installments == Some(0) {
            return Err(ModelError::validation("Installments must be at least 1"));
        }

        Ok(ChargeRequest {
            amount,
            currency_code: self.currency_code,
            email,
            source_id,
            capture: self.capture,
            description: self.description,
            installments: self.installments,
            antifraud_details: self.antifraud_details,
            metadata: self.metadata,
        })
    }
}

/// Result reported by the card network for a charge attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChargeOutcome {
    #[serde(default, rename = "type")]
    pub outcome_type: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub merchant_message: String,
    #[serde(default)]
    pub user_message: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub object: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub amount_refunded: u64,
    #[serde(default)]
    pub current_amount: u64,
    #[serde(default)]
    pub installments: u32,
    #[serde(default)]
    pub currency_code: Option<Currency>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<Value>,
    #[serde(default)]
    pub outcome: Option<ChargeOutcome>,
    #[serde(default)]
    pub fraud_score: Option<f64>,
    #[serde(default)]
    pub antifraud_details: Option<AntifraudDetails>,
    #[serde(default)]
    pub dispute: bool,
    #[serde(default)]
    pub capture: bool,
    #[serde(default)]
    pub reference_code: Option<String>,
    #[serde(default)]
    pub authorization_code: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub total_fee: Option<u64>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Charge {
    pub fn is_refundable(&self) -> bool {
        self.paid && self.amount_refunded < self.amount
    }
}
