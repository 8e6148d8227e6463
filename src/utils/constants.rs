/// Clave de localStorage con el username de la sesión (string plano, sin JSON)
pub const USER_STORAGE_KEY: &str = "user";

/// Estilo de mapa Mapbox
pub const MAP_STYLE: &str = "mapbox://styles/bamz-west/ckw0z6yp59alw14m33055i3ky";

/// Color de marcador para pins propios
pub const MARKER_COLOR_OWN: &str = "tomato";

/// Color de marcador para pins de otros usuarios
pub const MARKER_COLOR_OTHER: &str = "slateblue";

/// Factor de escala del marcador respecto al zoom del viewport
pub const MARKER_ZOOM_FACTOR: f64 = 7.0;

/// ID del elemento DOM que el mapa ancla como contenido del popup activo
pub const POPUP_CONTENT_ID: &str = "map-popup-content";
