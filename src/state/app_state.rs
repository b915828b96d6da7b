// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::config::CONFIG;
use crate::state::{FormState, NotificationState, Subscribers, UpdateType};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub form: FormState<web_sys::File>,
    pub notifications: NotificationState,
    subscribers: Subscribers,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        let subscribers = Subscribers::new();
        Self {
            form: FormState::new(subscribers.clone()),
            notifications: NotificationState::new(
                CONFIG.notification_config.max_visible,
                subscribers.clone(),
            ),
            subscribers,
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.subscribers.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
