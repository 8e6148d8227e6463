// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod view_state;

pub use app_state::AppState;
pub use view_state::{ActivePopup, AuthPanel, PinDraft, ViewEvent, ViewState, Viewport};
