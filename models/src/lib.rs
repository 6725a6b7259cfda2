//! Culqi API records.
//!
//! Pure data structures for the request bodies the client sends and the
//! responses it decodes. Request builders validate required fields before
//! anything reaches the network; response records tolerate missing fields
//! so that additive API changes do not break decoding.

pub mod charge;
pub mod currency;
pub mod customer;
pub mod error;
pub mod pagination;
pub mod refund;
pub mod token;

#[cfg(test)]
mod tests;

pub use charge::{AntifraudDetails, Charge, ChargeOutcome, ChargeRequest, ChargeRequestBuilder};
pub use currency::Currency;
pub use customer::{Customer, CustomerDeleted, CustomerRequest};
pub use error::model_error::ModelError;
pub use pagination::{Cursors, Paging, WrapperResponse};
pub use refund::{Refund, RefundReason, RefundRequest};
pub use token::{Token, TokenRequest, TokenRequestBuilder};

/// Key/value annotations Culqi stores alongside most resources.
pub type Metadata = std::collections::HashMap<String, String>;
