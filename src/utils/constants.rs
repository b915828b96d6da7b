/// Ruta del endpoint de eliminación de fondo (relativa a la URL base del backend)
pub const REMOVE_BACKGROUND_PATH: &str = "/api/remove-background";

/// Campos del multipart enviado al backend
pub const FIELD_IMAGE: &str = "image";
pub const FIELD_BG_COLOR: &str = "bgColor";

/// Color de fondo por defecto si el usuario nunca toca el picker
pub const DEFAULT_BG_COLOR: &str = "#ffffff";

/// Nombre de descarga cuando el backend no envía Content-Disposition
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "processed-image.jpg";

/// Tipo MIME del blob descargado si la respuesta no trae Content-Type
pub const DEFAULT_DOWNLOAD_MIME: &str = "application/octet-stream";

// Mensajes de notificación
pub const MSG_NO_FILE_SELECTED: &str = "No file selected";
pub const MSG_REMOVE_BACKGROUND_SUCCESS: &str = "Background removed successfully!";
pub const MSG_REMOVE_BACKGROUND_FAILED: &str = "Failed to remove background";
