// ============================================================================
// DOWNLOAD SERVICE - "Guardar como" desde el navegador
// ============================================================================
// Blob → object URL → <a download> → click → revoke.
// El object URL vive en un guard: se revoca al salir del scope pase lo que pase.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{cast_element, create_element};
use crate::error::AppError;
use crate::models::ProcessedImage;
use crate::services::Downloader;

/// URL `blob:` temporal; se revoca en Drop
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Crear blob con los bytes y su URL temporal
    pub fn from_bytes(bytes: &[u8], content_type: &str) -> Result<Self, JsValue> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);

        let options = BlobPropertyBag::new();
        options.set_type(content_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            log::warn!("⚠️ [DOWNLOAD] No se pudo revocar {}: {:?}", self.url, e);
        }
    }
}

/// Descarga mediante un ancla sintética
#[derive(Clone, Default)]
pub struct BrowserDownloader;

impl BrowserDownloader {
    pub fn new() -> Self {
        Self
    }

    fn trigger(image: &ProcessedImage) -> Result<(), JsValue> {
        let object_url = ObjectUrl::from_bytes(&image.bytes, &image.content_type)?;

        let link: HtmlAnchorElement = cast_element(create_element("a")?, "HtmlAnchorElement")?;
        link.set_href(object_url.as_str());
        link.set_download(&image.filename);
        link.click();

        log::info!("💾 [DOWNLOAD] Descarga disparada: {}", image.filename);
        Ok(())
    }
}

impl Downloader for BrowserDownloader {
    fn save_as(&self, image: &ProcessedImage) -> Result<(), AppError> {
        Self::trigger(image).map_err(|e| AppError::Download(format!("{:?}", e)))
    }
}
