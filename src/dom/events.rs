// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Para listeners en elementos del DOM: cuando el elemento se destruye
// (p.ej. con set_inner_html("")), el navegador limpia los listeners asociados,
// así que closure.forget() es seguro aquí.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, MouseEvent};

/// Cualquier evento cuya propagación se pueda detener
pub trait PropagationControl {
    fn stop_propagation(&self);
}

impl PropagationControl for Event {
    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

impl PropagationControl for MouseEvent {
    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Registrar handler genérico de `Event` (input, change)
fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para `input` (se dispara continuamente mientras se arrastra el picker)
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "input", handler)
}

/// Helper para `change` (selección de archivo en <input type="file">)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "change", handler)
}

/// Helper para eventos de drag & drop (dragenter, dragover, dragleave, drop)
pub fn on_drag<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(DragEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(DragEvent)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
