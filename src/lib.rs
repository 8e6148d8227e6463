// ============================================================================
// TRAVEL PINS - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de negocio
// - Services: SOLO comunicación API + storage
// - State: Una sola ViewState con un punto de entrada por transición
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::state::ViewEvent;
use crate::viewmodels::MapViewModel;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Travel Pins App - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;
    app.bootstrap();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}

// ============================================================================
// HANDLERS EXPORTADOS - Gestos del mapa (llamados desde JavaScript)
// ============================================================================

/// Click en un marcador: seleccionar el pin y recentrar el viewport
#[wasm_bindgen]
pub fn handle_marker_click(pin_id: String) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state().apply(ViewEvent::MarkerClicked(pin_id));

            if let Some((lat, long)) = app
                .state()
                .with_view(|v| v.selected_pin().map(|p| (p.lat, p.long)))
            {
                MapViewModel::recenter(lat, long);
            }
        }
    });
}

/// Doble click en el mapa: abrir un borrador en esas coordenadas
/// (ignorado sin sesión activa)
#[wasm_bindgen]
pub fn handle_map_double_click(lat: f64, long: f64) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state().apply(ViewEvent::MapDoubleClicked { lat, long });
        }
    });
}

/// Pan/zoom del mapa: sincronizar el viewport sin re-render
#[wasm_bindgen]
pub fn handle_viewport_changed(lat: f64, long: f64, zoom: f64) {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state()
                .apply_silent(ViewEvent::ViewportMoved { lat, long, zoom });
        }
    });
}

/// Cierre del popup activo (botón de cierre del popup del mapa)
#[wasm_bindgen]
pub fn handle_popup_closed() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state().apply(ViewEvent::PopupClosed);
        }
    });
}
