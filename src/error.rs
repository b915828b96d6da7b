// ============================================================================
// ERRORES - Fallos del flujo subir → procesar → descargar
// ============================================================================
// Internamente distinguimos la causa para los logs; el usuario solo ve
// "No file selected" o "Failed to remove background".
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::models::notification::Severity;
use crate::utils::constants::{MSG_NO_FILE_SELECTED, MSG_REMOVE_BACKGROUND_FAILED};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("download failed: {0}")]
    Download(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Mensaje visible para el usuario (solo dos tipos de fallo)
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::NoFileSelected => MSG_NO_FILE_SELECTED,
            _ => MSG_REMOVE_BACKGROUND_FAILED,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoFileSelected => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Dom(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_file_is_a_warning() {
        assert_eq!(AppError::NoFileSelected.severity(), Severity::Warning);
        assert_eq!(AppError::NoFileSelected.user_message(), "No file selected");
    }

    #[test]
    fn transport_and_http_failures_share_one_message() {
        let failures = [
            AppError::Network("connection refused".to_string()),
            AppError::Http { status: 500, status_text: "Internal Server Error".to_string() },
            AppError::Body("aborted".to_string()),
            AppError::Download("no document".to_string()),
            AppError::Dom("boom".to_string()),
        ];
        for failure in failures {
            assert_eq!(failure.user_message(), "Failed to remove background");
            assert_eq!(failure.severity(), Severity::Error);
        }
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = AppError::Http { status: 413, status_text: "Payload Too Large".to_string() };
        assert_eq!(err.to_string(), "HTTP 413: Payload Too Large");
    }
}
