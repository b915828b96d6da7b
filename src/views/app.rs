// ============================================================================
// APP VIEW - Layout principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::viewmodels::AppViewModel;
use crate::views::{render_color_picker, render_drop_zone, render_notification_root, render_submit_button};

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("div")?
        .class("form-card")
        .child(render_drop_zone(state, vm)?)?
        .child(render_color_picker(state, vm)?)?
        .child(render_submit_button(state, vm)?)?
        .build();

    let app = ElementBuilder::new("main")?
        .class("app")
        .child(form)?
        .child(render_notification_root(state)?)?
        .build();

    Ok(app)
}
