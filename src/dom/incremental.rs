// ============================================================================
// INCREMENTAL DOM UPDATES - Actualizar solo lo necesario sin re-render completo
// ============================================================================
// Si el elemento no existe todavía, se devuelve un error "needs full render"
// y lib.rs hace un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::dom::{append_child, clear_children, get_element_by_id, get_typed_by_id, set_text_content};
use crate::state::app_state::AppState;
use crate::views::notifications::render_notification_items;

pub const COLOR_VALUE_ID: &str = "bg-color-value";
pub const COLOR_SWATCH_ID: &str = "bg-color-swatch";
pub const COLOR_INPUT_ID: &str = "bg-color-input";
pub const NOTIFICATION_ROOT_ID: &str = "notification-root";

fn needs_full_render(id: &str) -> JsValue {
    JsValue::from_str(&format!("#{} not found, needs full render", id))
}

/// Actualizar lectura hex, muestra y valor del picker
pub fn update_color_preview(state: &AppState) -> Result<(), JsValue> {
    let color = state.form.get_bg_color();

    let label = get_element_by_id(COLOR_VALUE_ID).ok_or_else(|| needs_full_render(COLOR_VALUE_ID))?;
    set_text_content(&label, &color);

    if let Some(swatch) = get_typed_by_id::<HtmlElement>(COLOR_SWATCH_ID) {
        swatch.style().set_property("background-color", &color)?;
    }

    // Solo si difiere del estado
    if let Some(input) = get_typed_by_id::<HtmlInputElement>(COLOR_INPUT_ID) {
        if input.value() != color {
            input.set_value(&color);
        }
    }

    Ok(())
}

/// Re-renderizar solo el contenedor de toasts
pub fn update_notifications(state: &AppState) -> Result<(), JsValue> {
    let root = get_element_by_id(NOTIFICATION_ROOT_ID)
        .ok_or_else(|| needs_full_render(NOTIFICATION_ROOT_ID))?;

    clear_children(&root);
    for item in render_notification_items(state)? {
        append_child(&root, &item)?;
    }
    Ok(())
}
