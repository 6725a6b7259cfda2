//! Status code classification for Culqi responses.

use std::fmt;

/// Failure categories Culqi signals through HTTP status codes.
///
/// Messages are Culqi's own wording and are part of the error Display output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    InvalidRequest,
    /// 401
    Authentication,
    /// 422
    Parameter,
    /// 402
    Card,
    /// 429
    LimitApi,
    /// 404
    Resource,
    /// 500, 503
    Api,
    /// Any other code outside `[200, 206]`.
    Unexpected,
}

impl ErrorKind {
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "La petición tiene una sintaxis inválida",
            ErrorKind::Authentication => {
                "La petición no pudo ser procesada debido a problemas con las llaves"
            }
            ErrorKind::Parameter => "Algún parámetro de la petición es inválido",
            ErrorKind::Card => "No se pudo realizar el cargo a una tarjeta",
            ErrorKind::LimitApi => {
                "Estás haciendo muchas peticiones rápidamente al API o superaste tu límite designado"
            }
            ErrorKind::Resource => {
                "El recurso no puede ser encontrado, es inválido o tiene un estado diferente al permitido"
            }
            ErrorKind::Api => "Error interno del servidor de Culqi",
            ErrorKind::Unexpected => {
                "Error inesperado, el código de respuesta no se encuentra controlado"
            }
        }
    }

    /// Rate limiting and upstream failures may succeed on a later attempt.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::LimitApi | ErrorKind::Api)
    }

    pub const fn category(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Parameter => "parameter",
            ErrorKind::Card => "card",
            ErrorKind::LimitApi => "limit_api",
            ErrorKind::Resource => "resource",
            ErrorKind::Api => "api",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Map a status code to its classified kind.
///
/// Codes outside the table return `None`; the dispatcher then decides between
/// success (`[200, 206]`) and [`ErrorKind::Unexpected`].
pub fn classify(status: u16) -> Option<ErrorKind> {
    match status {
        400 => Some(ErrorKind::InvalidRequest),
        401 => Some(ErrorKind::Authentication),
        422 => Some(ErrorKind::Parameter),
        402 => Some(ErrorKind::Card),
        429 => Some(ErrorKind::LimitApi),
        404 => Some(ErrorKind::Resource),
        500 | 503 => Some(ErrorKind::Api),
        _ => None,
    }
}
