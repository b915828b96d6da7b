// ============================================================================
// BACKGROUND REMOVER - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO I/O (HTTP, descarga, toasts)
// - State: State Management con Rc<RefCell>
// - Models: Estructuras de datos
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Background Remover - backend: {}", CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con el tipo de actualización indicado.
/// Si la actualización incremental no encuentra su elemento, hace re-render completo.
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let needs_full_render = match update_type {
            UpdateType::Incremental(inc_type) => match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(inc_type.clone()) {
                    Ok(()) => false,
                    Err(e) => {
                        log::debug!("🔄 [UPDATE] {:?} falló ({:?}), re-render completo", inc_type, e);
                        true
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            },
            UpdateType::FullRender => true,
        };

        if needs_full_render {
            match app_cell.borrow_mut().as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            }
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
