//! HTTP status code helpers shared by dispatch and error classification.

/// First status code Culqi treats as a successful response.
pub const SUCCESS_RANGE_START: u16 = 200;

/// Last status code Culqi treats as a successful response (206 Partial Content).
pub const SUCCESS_RANGE_END: u16 = 206;

/// HTTP status code for error categorization.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Inclusive `[200, 206]` window in which a response body is handed back to the caller.
    pub fn is_success(&self) -> bool {
        (SUCCESS_RANGE_START..=SUCCESS_RANGE_END).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
