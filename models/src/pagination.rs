//! Envelope returned by Culqi list endpoints.
//!
//! The client hands these links back untouched; walking pages is left to the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub previous: String,
    #[serde(default)]
    pub next: String,
    #[serde(default)]
    pub cursors: Cursors,
}

impl Paging {
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }
}

/// A page of `T` plus its paging links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapperResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Paging,
}

impl<T> Default for WrapperResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            paging: Paging::default(),
        }
    }
}
