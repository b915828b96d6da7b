use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::AppViewModel;

/// Botón "Remove Background" (deshabilitado mientras hay petición en curso)
pub fn render_submit_button(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .flag("disabled", state.form.is_in_flight())?
        .text("Remove Background")
        .build();

    {
        let vm = vm.clone();
        on_click(&button, move |_e| {
            let vm = vm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    let row = ElementBuilder::new("div")?
        .class("actions")
        .child(button)?
        .build();

    Ok(row)
}
