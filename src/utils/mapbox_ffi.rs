// ============================================================================
// MAPBOX FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// El contrato inverso (gestos del mapa -> Rust) son las funciones
// #[wasm_bindgen] exportadas en lib.rs: handle_marker_click,
// handle_map_double_click, handle_viewport_changed, handle_popup_closed.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Inicializa el mapa en el contenedor dado
    #[wasm_bindgen(js_name = initMap)]
    pub fn init_map(container_id: &str, access_token: &str, style: &str, lat: f64, long: f64, zoom: f64);

    /// Reemplaza los marcadores del mapa (JSON de Vec<MapPin>)
    #[wasm_bindgen(js_name = setMapPins)]
    pub fn set_map_pins(pins_json: &str);

    /// Anima el viewport hacia las coordenadas dadas (zoom intacto)
    #[wasm_bindgen(js_name = flyTo)]
    pub fn fly_to(lat: f64, long: f64);

    /// Ancla un popup en coordenadas geográficas; el contenido es el
    /// elemento DOM con el id dado (construido por las views)
    #[wasm_bindgen(js_name = openMapPopup)]
    pub fn open_map_popup(lat: f64, long: f64, content_id: &str);

    /// Cierra el popup activo si existe
    #[wasm_bindgen(js_name = closeMapPopup)]
    pub fn close_map_popup();
}
