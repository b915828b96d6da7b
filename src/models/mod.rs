pub mod upload;
pub mod notification;

pub use upload::{FileHandle, ProcessedImage, RequestState};
pub use notification::{Notification, Severity};
