// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Todos los contenedores de estado comparten la misma lista de subscribers;
// cada cambio indica qué parte del DOM hay que actualizar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (archivo elegido/limpiado, petición iniciada/terminada)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Texto hex y muestra del color (sin destruir el input del picker)
    ColorPreview,
    /// Contenedor de toasts
    Notifications,
}

type Callback = Rc<dyn Fn(UpdateType)>;

/// Lista compartida de subscribers
#[derive(Clone, Default)]
pub struct Subscribers {
    callbacks: Rc<RefCell<Vec<Callback>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self, update: UpdateType) {
        // Copiar la lista para que un callback pueda suscribir sin pánico de borrow
        let callbacks: Vec<Callback> = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(update.clone());
        }
    }
}
