use crate::charge::AntifraudDetails;
use crate::{Metadata, ModelError};

use serde::{Deserialize, Serialize};

/// Body of `POST /customers`.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub address_city: String,
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl CustomerRequest {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("address_city", &self.address_city),
            ("phone_number", &self.phone_number),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ModelError::validation(format!("{field} cannot be empty")));
            }
        }

        if !self.email.contains('@') {
            return Err(ModelError::validation(format!("Invalid email: {}", self.email)));
        }

        if self.country_code.len() != 2 || !self.country_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ModelError::validation(format!(
                "Invalid country code: {}",
                self.country_code
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub creation_date: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub antifraud_details: Option<AntifraudDetails>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Response of `DELETE /customers/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CustomerDeleted {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub merchant_message: String,
}
