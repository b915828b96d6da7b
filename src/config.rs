use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub notification_config: NotificationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            notification_config: NotificationConfig::default(),
        }
    }
}

/// Comportamiento de los toasts (una sola notificación visible, arriba al centro)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub max_visible: usize,
    pub auto_hide_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            max_visible: 1,
            auto_hide_ms: 6000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            notification_config: NotificationConfig {
                max_visible: option_env!("NOTIFICATION_MAX_VISIBLE")
                    .unwrap_or("1").parse().unwrap_or(1),
                auto_hide_ms: option_env!("NOTIFICATION_AUTO_HIDE_MS")
                    .unwrap_or("6000").parse().unwrap_or(6000),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig {
            backend_url_development: "http://dev:5000".to_string(),
            backend_url_production: "https://prod".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "http://dev:5000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://prod");

        config.environment = "staging".to_string();
        assert_eq!(config.backend_url(), "http://dev:5000");
    }

    #[test]
    fn notifications_default_to_single_toast_for_six_seconds() {
        let config = NotificationConfig::default();
        assert_eq!(config.max_visible, 1);
        assert_eq!(config.auto_hide_ms, 6000);
    }

    #[test]
    fn logging_toggle_selects_level() {
        let mut config = AppConfig::default();
        assert!(config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);

        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
