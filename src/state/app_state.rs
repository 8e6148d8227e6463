// ============================================================================
// APP STATE - Estado global compartido (Rc<RefCell> + notificaciones)
// ============================================================================
// Envuelve la ViewState pura para poder compartirla entre closures. Todas
// las mutaciones pasan por apply() / apply_silent(); los subscribers se
// notifican después de soltar el borrow.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::view_state::{ViewEvent, ViewState, Viewport};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    view: Rc<RefCell<ViewState>>,

    // Callbacks para notificar cambios (Rc para poder compartir)
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(viewport: Viewport) -> Self {
        Self {
            view: Rc::new(RefCell::new(ViewState::new(viewport))),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Aplicar una transición y notificar a los subscribers
    pub fn apply(&self, event: ViewEvent) {
        log::debug!("🔁 [STATE] {:?}", event);
        self.view.borrow_mut().apply(event);
        self.notify_change();
    }

    /// Aplicar una transición SIN notificar (pan/zoom del mapa, campos del
    /// formulario: mutan estado pero no deben disparar re-render)
    pub fn apply_silent(&self, event: ViewEvent) {
        self.view.borrow_mut().apply(event);
    }

    /// Leer el estado de la vista
    pub fn with_view<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.view.borrow())
    }

    /// Snapshot clonado del estado (para pasarlo a tareas async)
    pub fn snapshot(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes(&self, callback: impl Fn() + 'static) {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_change(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_apply_notifies_subscribers() {
        let state = AppState::new(Viewport::default());
        let fired = Rc::new(Cell::new(0u32));

        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || {
            fired_clone.set(fired_clone.get() + 1);
        });

        state.apply(ViewEvent::LoginToggled);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_apply_silent_does_not_notify() {
        let state = AppState::new(Viewport::default());
        let fired = Rc::new(Cell::new(0u32));

        let fired_clone = fired.clone();
        state.subscribe_to_changes(move || {
            fired_clone.set(fired_clone.get() + 1);
        });

        state.apply_silent(ViewEvent::ViewportMoved { lat: 1.0, long: 2.0, zoom: 3.0 });
        assert_eq!(fired.get(), 0);
        assert_eq!(state.with_view(|v| v.viewport.zoom), 3.0);
    }
}
