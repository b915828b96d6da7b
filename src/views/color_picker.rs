// ============================================================================
// COLOR PICKER VIEW - Selección del color de fondo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::dom::{on_input, COLOR_INPUT_ID, COLOR_SWATCH_ID, COLOR_VALUE_ID, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::AppViewModel;

pub fn render_color_picker(state: &AppState, vm: &AppViewModel) -> Result<Element, JsValue> {
    let color = state.form.get_bg_color();

    let input = ElementBuilder::new("input")?
        .id(COLOR_INPUT_ID)?
        .class("color-picker__input")
        .attr("type", "color")?
        .attr("value", &color)?
        .build();

    {
        let vm = vm.clone();
        on_input(&input, move |e: Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.set_color(&target.value());
            }
        })?;
    }

    let readout = ElementBuilder::new("div")?
        .class("color-picker__readout")
        .child(
            ElementBuilder::new("span")?
                .id(COLOR_SWATCH_ID)?
                .class("color-picker__swatch")
                .attr("style", &format!("background-color: {}", color))?
                .build(),
        )?
        .child(
            ElementBuilder::new("code")?
                .id(COLOR_VALUE_ID)?
                .text(&color)
                .build(),
        )?
        .build();

    let section = ElementBuilder::new("div")?
        .class("color-picker")
        .child(
            ElementBuilder::new("p")?
                .class("color-picker__label")
                .text("Select Background Color")
                .build(),
        )?
        .child(input)?
        .child(readout)?
        .build();

    Ok(section)
}
