// ============================================================================
// PIN VIEWMODEL - Lógica de pins
// ============================================================================
// Carga inicial y creación. Sin retry ni backoff: los fallos se loguean y
// el estado queda como estaba (lista vacía en el arranque, borrador abierto
// en el submit).
// ============================================================================

use crate::models::{NewPinRequest, Pin};
use crate::services::{ApiClient, NetworkError};
use crate::state::PinDraft;

/// ViewModel de pins - SOLO lógica de negocio
pub struct PinViewModel {
    api_client: ApiClient,
}

impl PinViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar todos los pins (una vez, al arrancar)
    pub async fn load_pins(&self) -> Result<Vec<Pin>, NetworkError> {
        let pins = self.api_client.get_pins().await?;
        log::info!("📋 Pins cargados: {}", pins.len());
        Ok(pins)
    }

    /// Enviar el borrador: exactamente un request de creación con
    /// {username de la sesión + campos del borrador}
    pub async fn submit_draft(
        &self,
        username: &str,
        draft: &PinDraft,
    ) -> Result<Pin, NetworkError> {
        let request = Self::build_request(username, draft);
        let pin = self.api_client.create_pin(&request).await?;
        log::info!("✅ Pin creado: {} ({})", pin.title, pin.id);
        Ok(pin)
    }

    /// Construir el payload de creación desde sesión + borrador.
    /// Sin validación previa: un borrador intacto sube con rating 0.
    pub fn build_request(username: &str, draft: &PinDraft) -> NewPinRequest {
        NewPinRequest {
            username: username.to_string(),
            title: draft.title.clone(),
            desc: draft.desc.clone(),
            rating: draft.rating,
            lat: draft.lat,
            long: draft.long,
        }
    }
}

impl Default for PinViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_combines_session_and_draft() {
        let mut draft = PinDraft::at(10.0, 50.0);
        draft.title = "Berlin".to_string();
        draft.desc = "Nice".to_string();
        draft.rating = 5;

        let request = PinViewModel::build_request("alice", &draft);

        assert_eq!(request.username, "alice");
        assert_eq!(request.title, "Berlin");
        assert_eq!(request.desc, "Nice");
        assert_eq!(request.rating, 5);
        assert_eq!(request.lat, 10.0);
        assert_eq!(request.long, 50.0);
    }

    #[test]
    fn test_untouched_draft_submits_with_defaults() {
        let draft = PinDraft::at(10.0, 50.0);
        let request = PinViewModel::build_request("alice", &draft);

        assert_eq!(request.title, "");
        assert_eq!(request.desc, "");
        assert_eq!(request.rating, 0);
    }
}
