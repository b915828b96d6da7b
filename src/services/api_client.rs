// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// POST {base}/api/remove-background con multipart (image + bgColor).
// La respuesta es binaria; el nombre sale de Content-Disposition.
// ============================================================================

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::ProcessedImage;
use crate::services::BackgroundRemover;
use crate::utils::constants::{FIELD_BG_COLOR, FIELD_IMAGE, REMOVE_BACKGROUND_PATH};

/// Unir URL base y ruta sin duplicar la barra
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn remove_background_url(&self) -> String {
        endpoint_url(&self.base_url, REMOVE_BACKGROUND_PATH)
    }

    /// Construir el multipart con la imagen (con su nombre) y el color
    fn build_form(file: &File, bg_color: &str) -> Result<FormData, AppError> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename(FIELD_IMAGE, file, &file.name())?;
        form.append_with_str(FIELD_BG_COLOR, bg_color)?;
        Ok(form)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundRemover for ApiClient {
    type File = File;

    async fn remove_background(
        &self,
        file: &File,
        bg_color: &str,
    ) -> Result<ProcessedImage, AppError> {
        let url = self.remove_background_url();
        let form = Self::build_form(file, bg_color)?;

        log::info!("📤 [API] POST {} ({}, bgColor={})", url, file.name(), bg_color);

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let headers = response.headers();
        let content_type = headers.get("content-type");
        let content_disposition = headers.get("content-disposition");

        let bytes = response
            .binary()
            .await
            .map_err(|e| AppError::Body(e.to_string()))?;

        log::info!("✅ [API] Respuesta recibida: {} bytes", bytes.len());

        Ok(ProcessedImage::from_response_parts(
            bytes,
            content_type.as_deref(),
            content_disposition.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        assert_eq!(
            endpoint_url("http://localhost:5000/", REMOVE_BACKGROUND_PATH),
            "http://localhost:5000/api/remove-background"
        );
        assert_eq!(
            endpoint_url("https://api.example.com", REMOVE_BACKGROUND_PATH),
            "https://api.example.com/api/remove-background"
        );
    }

    #[test]
    fn client_uses_configured_base() {
        let client = ApiClient::with_base_url("http://10.0.0.2:8080");
        assert_eq!(
            client.remove_background_url(),
            "http://10.0.0.2:8080/api/remove-background"
        );
    }
}
