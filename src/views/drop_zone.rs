// ============================================================================
// DROP ZONE VIEW - Arrastrar y soltar o click para elegir archivo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{add_class, append_child, cast_element, on_change, on_click, on_drag, remove_class, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::AppViewModel;
use crate::views::icons::{close_icon, description_icon, upload_file_icon};

const ACTIVE_CLASS: &str = "drop-zone--active";

/// Renderizar drop zone (input oculto + contenido según estado)
pub fn render_drop_zone(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let zone = ElementBuilder::new("div")?
        .class("drop-zone")
        .attr("role", "button")?
        .attr("tabindex", "0")?
        .build();

    let input: HtmlInputElement = cast_element(
        ElementBuilder::new("input")?
            .class("drop-zone__input")
            .attr("type", "file")?
            .flag("hidden", true)?
            .build(),
        "HtmlInputElement",
    )?;

    // Archivo elegido desde el diálogo del sistema
    {
        let vm = vm.clone();
        on_change(&input, move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let file = input.files().and_then(|files| files.get(0));
            // Permitir volver a elegir el mismo archivo
            input.set_value("");
            vm.select_file(file);
        })?;
    }

    // El click programático sobre el input burbujea hasta el zone: cortarlo aquí
    on_click(&input, |e| e.stop_propagation())?;

    {
        let input = input.clone();
        on_click(&zone, move |_e| {
            input.click();
        })?;
    }

    for event_type in ["dragenter", "dragover"] {
        let zone_clone = zone.clone();
        on_drag(&zone, event_type, move |e| {
            e.prevent_default();
            let _ = add_class(&zone_clone, ACTIVE_CLASS);
        })?;
    }

    {
        let zone_clone = zone.clone();
        on_drag(&zone, "dragleave", move |_e| {
            let _ = remove_class(&zone_clone, ACTIVE_CLASS);
        })?;
    }

    {
        let vm = vm.clone();
        let zone_clone = zone.clone();
        on_drag(&zone, "drop", move |e| {
            e.prevent_default();
            let _ = remove_class(&zone_clone, ACTIVE_CLASS);
            let file = e
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            vm.select_file(file);
        })?;
    }

    append_child(&zone, &input)?;
    append_child(&zone, &render_content(state, vm)?)?;

    Ok(zone)
}

fn render_content(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let Some(file_name) = state.form.get_file_name() else {
        return ElementBuilder::new("div")?
            .class("drop-zone__empty")
            .child(
                ElementBuilder::new("span")?
                    .class("icon icon--large icon--primary")
                    .icon(&upload_file_icon())
                    .build(),
            )?
            .child(
                ElementBuilder::new("p")?
                    .class("drop-zone__hint")
                    .text("Drag & Drop or Choose File")
                    .build(),
            )
            .map(ElementBuilder::build);
    };

    let content = ElementBuilder::new("div")?
        .class("drop-zone__file")
        .build();

    if state.form.is_in_flight() {
        let spinner = ElementBuilder::new("div")?
            .class("spinner")
            .attr("role", "progressbar")?
            .attr("aria-label", "Processing")?
            .build();
        append_child(&content, &spinner)?;
        return Ok(content);
    }

    let close_btn = ElementBuilder::new("button")?
        .class("btn-icon drop-zone__clear")
        .attr("type", "button")?
        .attr("aria-label", "Clear file")?
        .icon(&close_icon())
        .build();
    {
        let vm = vm.clone();
        on_click(&close_btn, move |e| {
            vm.clear_file(&e);
        })?;
    }

    let icon = ElementBuilder::new("span")?
        .class("icon icon--large")
        .icon(&description_icon())
        .build();

    let name = ElementBuilder::new("p")?
        .class("drop-zone__filename")
        .text(&file_name)
        .build();

    append_child(&content, &close_btn)?;
    append_child(&content, &icon)?;
    append_child(&content, &name)?;

    Ok(content)
}
