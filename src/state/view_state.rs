// ============================================================================
// VIEW STATE - Máquina de estados de la UI
// ============================================================================
// Todo el estado de la vista en una sola estructura explícita, con un único
// punto de entrada por transición: ViewState::apply(ViewEvent). Las
// transiciones son funciones puras de (estado, evento) -> estado, sin DOM,
// sin red y sin storage, para poder testearlas directamente.
// ============================================================================

use crate::models::Pin;

/// Viewport del mapa: centro + zoom. Transitorio, nunca se persiste.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub lat: f64,
    pub long: f64,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(lat: f64, long: f64, zoom: f64) -> Self {
        Self { lat, long, zoom }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // Berlín, zoom continental
        Self::new(52.52, 13.408, 4.0)
    }
}

/// Pin en construcción: coordenadas elegidas con doble click + campos del
/// formulario acumulados antes del submit.
#[derive(Debug, Clone, PartialEq)]
pub struct PinDraft {
    pub lat: f64,
    pub long: f64,
    pub title: String,
    pub desc: String,
    /// 1-5 desde el formulario; 0 si nunca se tocó
    pub rating: u8,
}

impl PinDraft {
    pub fn at(lat: f64, long: f64) -> Self {
        Self {
            lat,
            long,
            title: String::new(),
            desc: String::new(),
            rating: 0,
        }
    }
}

/// A lo sumo un popup activo: ver un pin existente o redactar uno nuevo.
/// La exclusión mutua es por construcción.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivePopup {
    None,
    Viewing(String),
    Drafting(PinDraft),
}

/// Paneles de autenticación, mutuamente excluyentes por construcción.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthPanel {
    None,
    Login,
    Register,
}

/// Eventos de la UI y de las respuestas de red. Cada gesto expuesto y cada
/// callback asíncrono se traduce a exactamente uno de estos.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Username restaurado desde storage al arrancar
    SessionRestored(String),
    /// Respuesta del listado inicial de pins (reemplaza la lista)
    PinsLoaded(Vec<Pin>),
    /// Doble click en el mapa (solo con sesión activa)
    MapDoubleClicked { lat: f64, long: f64 },
    /// Click en un marcador existente
    MarkerClicked(String),
    /// Popup cerrado (el borrador se descarta)
    PopupClosed,
    DraftTitleChanged(String),
    DraftDescChanged(String),
    DraftRatingChanged(u8),
    /// createPin exitoso: el pin devuelto por el servidor
    PinCreated(Pin),
    LoggedIn(String),
    LoggedOut,
    LoginToggled,
    RegisterToggled,
    /// Pan/zoom reportado desde el mapa (sin re-render)
    ViewportMoved { lat: f64, long: f64, zoom: f64 },
}

/// Estado completo de la vista.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Username de la sesión activa; su presencia habilita crear pins
    pub session: Option<String>,
    pub pins: Vec<Pin>,
    pub active_popup: ActivePopup,
    pub auth_panel: AuthPanel,
    pub viewport: Viewport,
}

impl ViewState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            session: None,
            pins: Vec::new(),
            active_popup: ActivePopup::None,
            auth_panel: AuthPanel::None,
            viewport,
        }
    }

    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// Pin seleccionado si el popup activo es Viewing
    pub fn selected_pin(&self) -> Option<&Pin> {
        match &self.active_popup {
            ActivePopup::Viewing(id) => self.pins.iter().find(|p| &p.id == id),
            _ => None,
        }
    }

    /// Borrador abierto si el popup activo es Drafting
    pub fn draft(&self) -> Option<&PinDraft> {
        match &self.active_popup {
            ActivePopup::Drafting(draft) => Some(draft),
            _ => None,
        }
    }

    /// Único punto de entrada de transiciones.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::SessionRestored(username) => {
                self.session = Some(username);
            }

            ViewEvent::PinsLoaded(pins) => {
                self.pins = pins;
            }

            ViewEvent::MapDoubleClicked { lat, long } => {
                // Crear pins sin sesión es inalcanzable desde la UI
                if self.session_active() {
                    self.active_popup = ActivePopup::Drafting(PinDraft::at(lat, long));
                }
            }

            ViewEvent::MarkerClicked(id) => {
                if let Some(pin) = self.pins.iter().find(|p| p.id == id) {
                    // Recentrar es solo una actualización de estado; el zoom
                    // queda intacto
                    self.viewport.lat = pin.lat;
                    self.viewport.long = pin.long;
                    self.active_popup = ActivePopup::Viewing(id);
                }
            }

            ViewEvent::PopupClosed => {
                self.active_popup = ActivePopup::None;
            }

            ViewEvent::DraftTitleChanged(title) => {
                if let ActivePopup::Drafting(draft) = &mut self.active_popup {
                    draft.title = title;
                }
            }

            ViewEvent::DraftDescChanged(desc) => {
                if let ActivePopup::Drafting(draft) = &mut self.active_popup {
                    draft.desc = desc;
                }
            }

            ViewEvent::DraftRatingChanged(rating) => {
                if let ActivePopup::Drafting(draft) = &mut self.active_popup {
                    draft.rating = rating;
                }
            }

            ViewEvent::PinCreated(pin) => {
                // Dedup por id: un refetch tardío no puede duplicar el pin
                if !self.pins.iter().any(|p| p.id == pin.id) {
                    self.pins.push(pin);
                }
                self.active_popup = ActivePopup::None;
            }

            ViewEvent::LoggedIn(username) => {
                self.session = Some(username);
                self.auth_panel = AuthPanel::None;
            }

            ViewEvent::LoggedOut => {
                self.session = None;
                // Un borrador sin sesión no puede enviarse; se descarta.
                // La lista de pins queda intacta.
                if matches!(self.active_popup, ActivePopup::Drafting(_)) {
                    self.active_popup = ActivePopup::None;
                }
            }

            ViewEvent::LoginToggled => {
                self.auth_panel = match self.auth_panel {
                    AuthPanel::Login => AuthPanel::None,
                    _ => AuthPanel::Login,
                };
            }

            ViewEvent::RegisterToggled => {
                self.auth_panel = match self.auth_panel {
                    AuthPanel::Register => AuthPanel::None,
                    _ => AuthPanel::Register,
                };
            }

            ViewEvent::ViewportMoved { lat, long, zoom } => {
                self.viewport = Viewport::new(lat, long, zoom);
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, username: &str, lat: f64, long: f64) -> Pin {
        serde_json::from_str(&format!(
            r#"{{"_id":"{}","username":"{}","title":"t","desc":"d",
                "rating":3,"lat":{},"long":{},
                "createdAt":"2021-11-16T12:34:56.000Z"}}"#,
            id, username, lat, long
        ))
        .unwrap()
    }

    #[test]
    fn test_double_click_without_session_is_ignored() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });
        assert_eq!(state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_double_click_with_session_opens_draft_at_coords() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });

        let draft = state.draft().expect("draft should be open");
        assert_eq!(draft.lat, 10.0);
        assert_eq!(draft.long, 50.0);
        assert_eq!(draft.title, "");
        assert_eq!(draft.desc, "");
        assert_eq!(draft.rating, 0);
    }

    #[test]
    fn test_double_click_supersedes_open_pin_popup() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::PinsLoaded(vec![pin("p1", "bob", 1.0, 2.0)]));
        state.apply(ViewEvent::MarkerClicked("p1".to_string()));
        assert!(state.selected_pin().is_some());

        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });
        assert!(state.selected_pin().is_none());
        assert!(state.draft().is_some());
    }

    #[test]
    fn test_marker_click_selects_and_recenters_keeping_zoom() {
        let mut state = ViewState::default();
        let zoom_before = state.viewport.zoom;
        state.apply(ViewEvent::PinsLoaded(vec![pin("p1", "bob", 48.85, 2.35)]));

        state.apply(ViewEvent::MarkerClicked("p1".to_string()));

        assert_eq!(state.active_popup, ActivePopup::Viewing("p1".to_string()));
        assert_eq!(state.viewport.lat, 48.85);
        assert_eq!(state.viewport.long, 2.35);
        assert_eq!(state.viewport.zoom, zoom_before);
    }

    #[test]
    fn test_marker_click_on_unknown_id_is_ignored() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::MarkerClicked("ghost".to_string()));
        assert_eq!(state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_draft_field_changes_update_in_place() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });

        state.apply(ViewEvent::DraftTitleChanged("Berlin".to_string()));
        state.apply(ViewEvent::DraftDescChanged("Nice".to_string()));
        state.apply(ViewEvent::DraftRatingChanged(5));

        let draft = state.draft().unwrap();
        assert_eq!(draft.title, "Berlin");
        assert_eq!(draft.desc, "Nice");
        assert_eq!(draft.rating, 5);
        // Las coordenadas elegidas no cambian al editar campos
        assert_eq!(draft.lat, 10.0);
        assert_eq!(draft.long, 50.0);
    }

    #[test]
    fn test_draft_field_changes_without_draft_are_ignored() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::DraftTitleChanged("Berlin".to_string()));
        assert_eq!(state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_pin_created_appends_and_closes_draft() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });

        let created = pin("new-id", "alice", 10.0, 50.0);
        state.apply(ViewEvent::PinCreated(created.clone()));

        assert_eq!(state.pins.len(), 1);
        assert_eq!(state.pins[0], created);
        assert_eq!(state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_pin_created_deduplicates_by_id() {
        let mut state = ViewState::default();
        let created = pin("p1", "alice", 10.0, 50.0);
        state.apply(ViewEvent::PinsLoaded(vec![created.clone()]));
        state.apply(ViewEvent::PinCreated(created));
        assert_eq!(state.pins.len(), 1);
    }

    #[test]
    fn test_pins_loaded_replaces_list() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::PinsLoaded(vec![pin("p1", "bob", 1.0, 2.0)]));
        state.apply(ViewEvent::PinsLoaded(vec![
            pin("p2", "carol", 3.0, 4.0),
            pin("p3", "dave", 5.0, 6.0),
        ]));
        assert_eq!(state.pins.len(), 2);
        assert!(state.pins.iter().all(|p| p.id != "p1"));
    }

    #[test]
    fn test_login_sets_session_and_closes_panels() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::LoginToggled);
        state.apply(ViewEvent::LoggedIn("alice".to_string()));
        assert_eq!(state.session.as_deref(), Some("alice"));
        assert_eq!(state.auth_panel, AuthPanel::None);
    }

    #[test]
    fn test_logout_clears_session_keeps_pins_discards_draft() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::PinsLoaded(vec![pin("p1", "bob", 1.0, 2.0)]));
        state.apply(ViewEvent::MapDoubleClicked { lat: 10.0, long: 50.0 });

        state.apply(ViewEvent::LoggedOut);

        assert_eq!(state.session, None);
        assert_eq!(state.pins.len(), 1);
        assert_eq!(state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_logout_keeps_viewing_popup_open() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::SessionRestored("alice".to_string()));
        state.apply(ViewEvent::PinsLoaded(vec![pin("p1", "bob", 1.0, 2.0)]));
        state.apply(ViewEvent::MarkerClicked("p1".to_string()));

        state.apply(ViewEvent::LoggedOut);

        assert_eq!(state.active_popup, ActivePopup::Viewing("p1".to_string()));
    }

    #[test]
    fn test_panel_toggle_is_idempotent_over_two_applications() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::RegisterToggled);
        assert_eq!(state.auth_panel, AuthPanel::Register);
        state.apply(ViewEvent::RegisterToggled);
        assert_eq!(state.auth_panel, AuthPanel::None);
    }

    #[test]
    fn test_auth_panels_are_mutually_exclusive() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::LoginToggled);
        assert_eq!(state.auth_panel, AuthPanel::Login);

        state.apply(ViewEvent::RegisterToggled);
        assert_eq!(state.auth_panel, AuthPanel::Register);

        state.apply(ViewEvent::LoginToggled);
        assert_eq!(state.auth_panel, AuthPanel::Login);
    }

    #[test]
    fn test_viewport_moved_syncs_center_and_zoom() {
        let mut state = ViewState::default();
        state.apply(ViewEvent::ViewportMoved { lat: 40.4, long: -3.7, zoom: 8.0 });
        assert_eq!(state.viewport, Viewport::new(40.4, -3.7, 8.0));
    }
}
