// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod form_state;
pub mod notification_state;
pub mod app_state;

pub use reactivity::*;
pub use form_state::*;
pub use notification_state::*;
pub use app_state::*;
