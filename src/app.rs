// ============================================================================
// APP - Controlador de la aplicación
// ============================================================================
// Composición: restaura la sesión, dispara la carga inicial de pins,
// re-renderiza la capa de UI en cada cambio de estado y sincroniza el mapa
// (marcadores + popup activo) vía FFI.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{ActivePopup, AppState, ViewEvent, Viewport};
use crate::utils::constants::POPUP_CONTENT_ID;
use crate::utils::mapbox_ffi::{close_map_popup, open_map_popup};
use crate::viewmodels::{MapViewModel, PinViewModel, SessionViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let map = &CONFIG.map_config;
        let state = AppState::new(Viewport::new(
            map.default_center_lat,
            map.default_center_long,
            map.default_zoom,
        ));

        // Restaurar sesión desde storage si existe (sin notificar: todavía
        // no hay nada renderizado)
        if let Some(username) = SessionViewModel::new().restore() {
            state.apply_silent(ViewEvent::SessionRestored(username));
        }

        // Re-render automático en cada cambio de estado, batcheado con un
        // Timeout(0) para salir del handler en curso
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Arranque: inicializar el mapa y disparar la carga inicial de pins
    pub fn bootstrap(&self) {
        MapViewModel::initialize();

        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let vm = PinViewModel::new();
            match vm.load_pins().await {
                Ok(pins) => state.apply(ViewEvent::PinsLoaded(pins)),
                Err(e) => {
                    // Sin retry: la lista queda vacía y el error solo se loguea
                    log::error!("❌ Error cargando pins: {}", e);
                }
            }
        });
    }

    /// Renderizar la capa de UI y sincronizar el mapa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }

        let view = self.state.snapshot();
        MapViewModel::sync_pins(&view);

        // Anclar el contenido del popup activo en sus coordenadas
        match &view.active_popup {
            ActivePopup::Viewing(id) => {
                if let Some(pin) = view.pins.iter().find(|p| &p.id == id) {
                    open_map_popup(pin.lat, pin.long, POPUP_CONTENT_ID);
                }
            }
            ActivePopup::Drafting(draft) => {
                open_map_popup(draft.lat, draft.long, POPUP_CONTENT_ID);
            }
            ActivePopup::None => close_map_popup(),
        }

        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
