pub mod app;
pub mod icons;
pub mod drop_zone;
pub mod color_picker;
pub mod submit_button;
pub mod notifications;

pub use app::render_app;
pub use drop_zone::render_drop_zone;
pub use color_picker::render_color_picker;
pub use submit_button::render_submit_button;
pub use notifications::{render_notification_root, render_notification_items};
