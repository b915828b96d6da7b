// ============================================================================
// NOTIFICATION STATE - Cola de toasts visibles
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::models::{Notification, Severity};
use crate::state::{IncrementalUpdate, Subscribers, UpdateType};

#[derive(Clone)]
pub struct NotificationState {
    pub visible: Rc<RefCell<VecDeque<Notification>>>,
    next_id: Rc<Cell<u32>>,
    max_visible: usize,
    subscribers: Subscribers,
}

impl NotificationState {
    pub fn new(max_visible: usize, subscribers: Subscribers) -> Self {
        Self {
            visible: Rc::new(RefCell::new(VecDeque::new())),
            next_id: Rc::new(Cell::new(1)),
            max_visible: max_visible.max(1),
            subscribers,
        }
    }

    /// Agregar notificación; la más antigua sale si se supera el máximo.
    /// Retorna el id para poder cerrarla después.
    pub fn push(&self, message: &str, severity: Severity) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        {
            let mut visible = self.visible.borrow_mut();
            visible.push_back(Notification {
                id,
                message: message.to_string(),
                severity,
            });
            while visible.len() > self.max_visible {
                visible.pop_front();
            }
        }

        self.subscribers
            .notify(UpdateType::Incremental(IncrementalUpdate::Notifications));
        id
    }

    /// Cerrar por id (no hace nada si ya fue reemplazada)
    pub fn dismiss(&self, id: u32) {
        let removed = {
            let mut visible = self.visible.borrow_mut();
            let before = visible.len();
            visible.retain(|n| n.id != id);
            visible.len() != before
        };

        if removed {
            self.subscribers
                .notify(UpdateType::Incremental(IncrementalUpdate::Notifications));
        }
    }

    pub fn get_visible(&self) -> Vec<Notification> {
        self.visible.borrow().iter().cloned().collect()
    }
}
