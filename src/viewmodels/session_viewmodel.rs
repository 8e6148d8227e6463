// ============================================================================
// SESSION VIEWMODEL - Lógica de sesión
// ============================================================================
// La autenticación real vive en el backend; aquí solo se postean
// credenciales y se mantiene el username en storage.
// ============================================================================

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::{ApiClient, NetworkError, SessionService};

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    api_client: ApiClient,
    session_service: SessionService,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
            session_service: SessionService::new(),
        }
    }

    /// Restaurar la sesión guardada al arrancar
    pub fn restore(&self) -> Option<String> {
        let username = self.session_service.load();
        if let Some(ref user) = username {
            log::info!("💾 Sesión encontrada en storage: {}", user);
        }
        username
    }

    /// Login: postear credenciales y persistir el username devuelto
    pub async fn login(&self, username: String, password: String) -> Result<String, NetworkError> {
        let credentials = LoginRequest { username, password };
        let user = self.api_client.login(&credentials).await?;

        if let Err(e) = self.session_service.save(&user.username) {
            log::error!("❌ Error guardando sesión en storage: {}", e);
        }

        Ok(user.username)
    }

    /// Registro de usuario nuevo (no abre sesión)
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), NetworkError> {
        let registration = RegisterRequest { username, email, password };
        self.api_client.register(&registration).await
    }

    /// Logout: limpiar la copia durable. La lista de pins no se toca.
    pub fn logout(&self) {
        log::info!("👋 Logout iniciado");
        if let Err(e) = self.session_service.clear() {
            log::error!("❌ Error limpiando sesión de storage: {}", e);
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
