use crate::{Metadata, ModelError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    Duplicado,
    Fraudulento,
    SolicitudComprador,
}

/// Body of `POST /refunds`.
#[derive(Debug, Clone, Serialize)]
pub struct RefundRequest {
    pub amount: u64,
    pub charge_id: String,
    pub reason: RefundReason,
}

impl RefundRequest {
    #[track_caller]
    pub fn new(
        charge_id: impl Into<String>,
        amount: u64,
        reason: RefundReason,
    ) -> Result<Self, ModelError> {
        let charge_id = charge_id.into();

        if charge_id.is_empty() {
            return Err(ModelError::validation("Charge id cannot be empty"));
        }

        if amount == 0 {
            return Err(ModelError::validation("Refund amount must be greater than zero"));
        }

        Ok(Self {
            amount,
            charge_id,
            reason,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Refund {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub charge_id: String,
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub amount: u64,
    pub reason: Option<RefundReason>,
    #[serde(default)]
    pub metadata: Metadata,
}
