// ============================================================================
// MAP VIEWMODEL - Lógica de negocio del mapa
// ============================================================================
// SOLO preparación de datos para el renderer JS - Sin estado
// El render real (tiles, marcadores, animación) es del lado Mapbox GL JS.
// ============================================================================

use serde::Serialize;

use crate::config::CONFIG;
use crate::models::Pin;
use crate::state::ViewState;
use crate::utils::constants::{MAP_STYLE, MARKER_COLOR_OTHER, MARKER_COLOR_OWN, MARKER_ZOOM_FACTOR};
use crate::utils::mapbox_ffi::{fly_to, init_map, set_map_pins};

/// Marcador listo para el mapa
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapPin {
    pub id: String,
    pub lat: f64,
    pub long: f64,
    /// "tomato" para pins propios, "slateblue" para los de otros usuarios
    pub color: &'static str,
    /// Tamaño visual escalado por el zoom del viewport
    pub size: f64,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Inicializar el mapa con el viewport por defecto de la config
    pub fn initialize() {
        let map = &CONFIG.map_config;
        log::info!("🗺️ Inicializando mapa en ({}, {}) zoom {}",
                   map.default_center_lat, map.default_center_long, map.default_zoom);
        init_map(
            "map",
            CONFIG.mapbox_token(),
            MAP_STYLE,
            map.default_center_lat,
            map.default_center_long,
            map.default_zoom,
        );
    }

    /// Convertir los pins a marcadores según la sesión y el zoom actuales
    pub fn prepare_pins(pins: &[Pin], session: Option<&str>, zoom: f64) -> Vec<MapPin> {
        pins.iter()
            .map(|pin| MapPin {
                id: pin.id.clone(),
                lat: pin.lat,
                long: pin.long,
                color: Self::marker_color(pin, session),
                size: Self::marker_size(zoom),
            })
            .collect()
    }

    fn marker_color(pin: &Pin, session: Option<&str>) -> &'static str {
        match session {
            Some(username) if pin.is_owned_by(username) => MARKER_COLOR_OWN,
            _ => MARKER_COLOR_OTHER,
        }
    }

    fn marker_size(zoom: f64) -> f64 {
        zoom * MARKER_ZOOM_FACTOR
    }

    /// Enviar los marcadores actuales al mapa
    pub fn sync_pins(view: &ViewState) {
        let markers = Self::prepare_pins(&view.pins, view.session.as_deref(), view.viewport.zoom);

        match serde_json::to_string(&markers) {
            Ok(json) => set_map_pins(&json),
            Err(e) => log::error!("❌ Error serializando marcadores: {}", e),
        }
    }

    /// Animar el viewport hacia unas coordenadas (el zoom queda intacto)
    pub fn recenter(lat: f64, long: f64) {
        fly_to(lat, long);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, username: &str) -> Pin {
        serde_json::from_str(&format!(
            r#"{{"_id":"{}","username":"{}","title":"t","desc":"d",
                "rating":3,"lat":1.0,"long":2.0,
                "createdAt":"2021-11-16T12:34:56.000Z"}}"#,
            id, username
        ))
        .unwrap()
    }

    #[test]
    fn test_own_pin_gets_own_color() {
        let markers = MapViewModel::prepare_pins(&[pin("p1", "alice")], Some("alice"), 4.0);
        assert_eq!(markers[0].color, "tomato");
    }

    #[test]
    fn test_other_users_pin_gets_other_color() {
        // Arranque con user="alice" y un pin de "bob": marcador en el color
        // de "otro usuario"
        let markers = MapViewModel::prepare_pins(&[pin("p1", "bob")], Some("alice"), 4.0);
        assert_eq!(markers[0].color, "slateblue");
    }

    #[test]
    fn test_without_session_every_pin_is_other() {
        let markers = MapViewModel::prepare_pins(&[pin("p1", "alice")], None, 4.0);
        assert_eq!(markers[0].color, "slateblue");
    }

    #[test]
    fn test_marker_size_scales_with_zoom() {
        let markers = MapViewModel::prepare_pins(&[pin("p1", "bob")], None, 4.0);
        assert_eq!(markers[0].size, 28.0);

        let markers = MapViewModel::prepare_pins(&[pin("p1", "bob")], None, 10.0);
        assert_eq!(markers[0].size, 70.0);
    }

    #[test]
    fn test_marker_carries_pin_coords_and_id() {
        let markers = MapViewModel::prepare_pins(&[pin("p1", "bob")], None, 4.0);
        assert_eq!(markers[0].id, "p1");
        assert_eq!(markers[0].lat, 1.0);
        assert_eq!(markers[0].long, 2.0);
    }
}
