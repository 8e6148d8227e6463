// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{AuthUser, LoginRequest, NewPinRequest, Pin, RegisterRequest};

/// Único tipo de fallo reconocido: el request no se completó, el servidor
/// devolvió un status de error, o la respuesta no se pudo decodificar.
#[derive(Debug, Clone)]
pub enum NetworkError {
    Request(String),
    Status(u16, String),
    Decode(String),
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::Request(msg) => write!(f, "Network error: {}", msg),
            NetworkError::Status(code, text) => write!(f, "HTTP {}: {}", code, text),
            NetworkError::Decode(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Listar todos los pins
    pub async fn get_pins(&self) -> Result<Vec<Pin>, NetworkError> {
        let url = format!("{}/api/pins", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(NetworkError::Status(response.status(), response.status_text()));
        }

        response.json::<Vec<Pin>>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }

    /// Crear un pin nuevo; el servidor asigna _id y createdAt
    pub async fn create_pin(&self, new_pin: &NewPinRequest) -> Result<Pin, NetworkError> {
        let url = format!("{}/api/pins", self.base_url);

        log::info!("📌 Creando pin \"{}\" para {}", new_pin.title, new_pin.username);

        let response = Request::post(&url)
            .json(new_pin)
            .map_err(|e| NetworkError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(NetworkError::Status(response.status(), response.status_text()));
        }

        response.json::<Pin>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }

    /// Login contra el backend; devuelve el usuario autenticado
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthUser, NetworkError> {
        let url = format!("{}/api/users/login", self.base_url);

        log::info!("🔐 Iniciando login para usuario: {}", credentials.username);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| NetworkError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(NetworkError::Status(response.status(), response.status_text()));
        }

        response.json::<AuthUser>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }

    /// Registro de usuario nuevo
    pub async fn register(&self, registration: &RegisterRequest) -> Result<(), NetworkError> {
        let url = format!("{}/api/users/register", self.base_url);

        log::info!("📝 Registrando usuario: {}", registration.username);

        let response = Request::post(&url)
            .json(registration)
            .map_err(|e| NetworkError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(NetworkError::Status(response.status(), response.status_text()));
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = NetworkError::Status(500, "Internal Server Error".to_string());
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");

        let err = NetworkError::Request("timeout".to_string());
        assert_eq!(err.to_string(), "Network error: timeout");
    }
}
