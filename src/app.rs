// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::dom::incremental::{update_color_preview, update_notifications};
use crate::services::{ApiClient, BrowserDownloader, ToastNotifier};
use crate::state::app_state::AppState;
use crate::state::{IncrementalUpdate, UpdateType};
use crate::viewmodels::{AppViewModel, RemoveBackgroundViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    view_model: AppViewModel,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let view_model = RemoveBackgroundViewModel::new(
            state.form.clone(),
            ApiClient::new(),
            BrowserDownloader::new(),
            ToastNotifier::new(state.notifications.clone()),
        );

        // Diferir el render para no re-entrar en APP mientras un handler sigue activo
        state.subscribe_to_changes(move |update: UpdateType| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            })
            .forget();
        });

        Ok(Self {
            state,
            view_model,
            root,
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let app_view = render_app(&self.state, &self.view_model)?;
        append_child(&self.root, &app_view)?;
        log::debug!("✅ [APP] Render completo");
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::ColorPreview => update_color_preview(&self.state),
            IncrementalUpdate::Notifications => update_notifications(&self.state),
        }
    }
}
