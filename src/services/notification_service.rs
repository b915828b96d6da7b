// ============================================================================
// NOTIFICATION SERVICE - Toasts con auto-ocultado
// ============================================================================

use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::models::Severity;
use crate::services::Notifier;
use crate::state::NotificationState;

#[derive(Clone)]
pub struct ToastNotifier {
    state: NotificationState,
    auto_hide_ms: u32,
}

impl ToastNotifier {
    pub fn new(state: NotificationState) -> Self {
        Self {
            state,
            auto_hide_ms: CONFIG.notification_config.auto_hide_ms,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => log::error!("🔔 [NOTIFY] {}", message),
            Severity::Warning => log::warn!("🔔 [NOTIFY] {}", message),
            Severity::Success | Severity::Info => log::info!("🔔 [NOTIFY] {}", message),
        }

        let id = self.state.push(message, severity);

        let state = self.state.clone();
        Timeout::new(self.auto_hide_ms, move || {
            state.dismiss(id);
        })
        .forget();
    }
}
