use crate::utils::constants::{DEFAULT_DOWNLOAD_FILENAME, DEFAULT_DOWNLOAD_MIME};
use crate::utils::content_disposition::filename_from_content_disposition;

/// Estado de la petición al backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

impl RequestState {
    pub fn is_in_flight(self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

/// Archivo elegido por el usuario (en el navegador: `web_sys::File`)
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> f64;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn byte_size(&self) -> f64 {
        self.size()
    }
}

/// Imagen devuelta por el backend, lista para descargar
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
}

impl ProcessedImage {
    /// Construir desde las partes de la respuesta HTTP
    pub fn from_response_parts(
        bytes: Vec<u8>,
        content_type: Option<&str>,
        content_disposition: Option<&str>,
    ) -> Self {
        let filename = content_disposition
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_FILENAME.to_string());

        let content_type = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_DOWNLOAD_MIME)
            .to_string();

        Self {
            bytes,
            content_type,
            filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_comes_from_content_disposition() {
        let image = ProcessedImage::from_response_parts(
            vec![1, 2, 3],
            Some("image/png"),
            Some(r#"attachment; filename="out.png""#),
        );
        assert_eq!(image.filename, "out.png");
        assert_eq!(image.content_type, "image/png");
        assert_eq!(image.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn missing_header_uses_default_name() {
        let image = ProcessedImage::from_response_parts(vec![], None, None);
        assert_eq!(image.filename, "processed-image.jpg");
        assert_eq!(image.content_type, "application/octet-stream");
    }

    #[test]
    fn unparseable_header_uses_default_name() {
        let image = ProcessedImage::from_response_parts(vec![0], Some(" "), Some("inline"));
        assert_eq!(image.filename, "processed-image.jpg");
        assert_eq!(image.content_type, "application/octet-stream");
    }

    #[test]
    fn request_state_defaults_to_idle() {
        assert_eq!(RequestState::default(), RequestState::Idle);
        assert!(!RequestState::Idle.is_in_flight());
        assert!(RequestState::InFlight.is_in_flight());
    }
}
