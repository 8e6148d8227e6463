// ============================================================================
// SESSION SERVICE - Persistencia del username en localStorage
// ============================================================================
// El único estado durable del cliente: un username plano bajo la clave
// "user". Sin expiración, sin validación de forma.
// ============================================================================

use crate::utils::constants::USER_STORAGE_KEY;
use crate::utils::storage;

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Cargar el username guardado, si existe
    pub fn load(&self) -> Option<String> {
        storage::load_string(USER_STORAGE_KEY)
    }

    /// Guardar el username (escritura síncrona e inmediata)
    pub fn save(&self, username: &str) -> Result<(), String> {
        storage::save_string(USER_STORAGE_KEY, username)?;
        log::info!("💾 Sesión guardada en storage: {}", username);
        Ok(())
    }

    /// Limpiar la copia durable de la sesión
    pub fn clear(&self) -> Result<(), String> {
        storage::remove_key(USER_STORAGE_KEY)?;
        log::info!("🗑️ Sesión eliminada de storage");
        Ok(())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
