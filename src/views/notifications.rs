// ============================================================================
// NOTIFICATIONS VIEW - Toasts (arriba al centro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder, NOTIFICATION_ROOT_ID};
use crate::state::app_state::AppState;
use crate::views::icons::close_icon;

/// Contenedor de toasts; update_notifications lo rellena incrementalmente
pub fn render_notification_root(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .id(NOTIFICATION_ROOT_ID)?
        .class("notifications notifications--top-center")
        .attr("aria-live", "polite")?
        .build();

    for item in render_notification_items(state)? {
        append_child(&root, &item)?;
    }
    Ok(root)
}

pub fn render_notification_items(state: &AppState) -> Result<Vec<Element>, JsValue> {
    let mut items = Vec::new();

    for notification in state.notifications.get_visible() {
        let close_btn = ElementBuilder::new("button")?
            .class("btn-icon toast__close")
            .attr("type", "button")?
            .attr("aria-label", "Dismiss")?
            .icon(&close_icon())
            .build();
        {
            let notifications = state.notifications.clone();
            let id = notification.id;
            on_click(&close_btn, move |_e| notifications.dismiss(id))?;
        }

        let toast = ElementBuilder::new("div")?
            .class(&format!("toast toast--{}", notification.severity.css_modifier()))
            .attr("role", "alert")?
            .child(
                ElementBuilder::new("span")?
                    .class("toast__message")
                    .text(&notification.message)
                    .build(),
            )?
            .child(close_btn)?
            .build();

        items.push(toast);
    }

    Ok(items)
}
