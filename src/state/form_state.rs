// ============================================================================
// FORM STATE - Archivo elegido, color de fondo y estado de la petición
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{FileHandle, RequestState};
use crate::state::{IncrementalUpdate, Subscribers, UpdateType};
use crate::utils::constants::DEFAULT_BG_COLOR;

/// Estado del formulario de subida
pub struct FormState<F> {
    pub file: Rc<RefCell<Option<F>>>,
    pub bg_color: Rc<RefCell<String>>,
    pub request_state: Rc<RefCell<RequestState>>,
    subscribers: Subscribers,
}

impl<F> Clone for FormState<F> {
    fn clone(&self) -> Self {
        Self {
            file: self.file.clone(),
            bg_color: self.bg_color.clone(),
            request_state: self.request_state.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<F: FileHandle> FormState<F> {
    pub fn new(subscribers: Subscribers) -> Self {
        Self {
            file: Rc::new(RefCell::new(None)),
            bg_color: Rc::new(RefCell::new(DEFAULT_BG_COLOR.to_string())),
            request_state: Rc::new(RefCell::new(RequestState::Idle)),
            subscribers,
        }
    }

    /// Obtener archivo seleccionado
    pub fn get_file(&self) -> Option<F> {
        self.file.borrow().clone()
    }

    /// Nombre del archivo seleccionado (para la vista)
    pub fn get_file_name(&self) -> Option<String> {
        self.file.borrow().as_ref().map(FileHandle::file_name)
    }

    pub fn has_file(&self) -> bool {
        self.file.borrow().is_some()
    }

    /// Establecer (o limpiar con None) el archivo seleccionado
    pub fn set_file(&self, file: Option<F>) {
        *self.file.borrow_mut() = file;
        self.subscribers.notify(UpdateType::FullRender);
    }

    pub fn get_bg_color(&self) -> String {
        self.bg_color.borrow().clone()
    }

    /// El picker sigue abierto mientras se arrastra: solo update incremental
    pub fn set_bg_color(&self, color: String) {
        *self.bg_color.borrow_mut() = color;
        self.subscribers
            .notify(UpdateType::Incremental(IncrementalUpdate::ColorPreview));
    }

    pub fn get_request_state(&self) -> RequestState {
        *self.request_state.borrow()
    }

    pub fn is_in_flight(&self) -> bool {
        self.get_request_state().is_in_flight()
    }

    pub fn set_request_state(&self, state: RequestState) {
        *self.request_state.borrow_mut() = state;
        self.subscribers.notify(UpdateType::FullRender);
    }
}
