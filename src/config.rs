use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub mapbox_access_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://travel-pin-backend.herokuapp.com".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            mapbox_access_token: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_long: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 52.52,
            default_center_long: 13.408,
            default_zoom: 4.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("https://travel-pin-backend.herokuapp.com").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("52.52").parse().unwrap_or(52.52),
                default_center_long: option_env!("DEFAULT_MAP_CENTER_LONG")
                    .unwrap_or("13.408").parse().unwrap_or(13.408),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("4.0").parse().unwrap_or(4.0),
            },
            mapbox_access_token: option_env!("MAPBOX_ACCESS_TOKEN")
                .unwrap_or("").to_string(),
        }
    }

    /// Obtiene la URL del backend
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Obtiene el token de Mapbox
    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
