// ============================================================================
// SERVICES - SOLO I/O (HTTP, descarga, toasts)
// ============================================================================
// Los traits son la frontera con el ViewModel: en el navegador se usan las
// implementaciones de abajo, en tests se sustituyen por dobles.
// ============================================================================

pub mod api_client;
pub mod download_service;
pub mod notification_service;

pub use api_client::ApiClient;
pub use download_service::{BrowserDownloader, ObjectUrl};
pub use notification_service::ToastNotifier;

use crate::error::AppError;
use crate::models::{FileHandle, ProcessedImage, Severity};

/// Backend que elimina el fondo de una imagen
#[allow(async_fn_in_trait)]
pub trait BackgroundRemover {
    type File: FileHandle;

    /// Una sola petición; cualquier estado no-2xx es un error
    async fn remove_background(
        &self,
        file: &Self::File,
        bg_color: &str,
    ) -> Result<ProcessedImage, AppError>;
}

/// Dispara el "guardar como" de la imagen procesada
pub trait Downloader {
    fn save_as(&self, image: &ProcessedImage) -> Result<(), AppError>;
}

/// Notificaciones transitorias para el usuario
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}
