// Utils compartidos

pub mod constants;
pub mod color;
pub mod content_disposition;

pub use constants::*;
pub use color::normalize_hex_color;
pub use content_disposition::filename_from_content_disposition;
