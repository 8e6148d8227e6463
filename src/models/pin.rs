// ============================================================================
// PIN - Modelo compartido con el backend
// ============================================================================
// Los nombres del wire format son los del backend (_id, desc, lat, long,
// createdAt); los campos Rust usan nombres idiomáticos con serde rename.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pin geolocalizado devuelto por el backend.
/// Inmutable en el cliente: la creación es la única mutación expuesta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// ID opaco asignado por el servidor
    #[serde(rename = "_id")]
    pub id: String,

    /// Usuario creador del pin
    pub username: String,

    pub title: String,
    pub desc: String,

    /// Valoración 1-5 (0 si el formulario nunca se tocó)
    #[serde(default)]
    pub rating: u8,

    pub lat: f64,
    pub long: f64,

    /// Timestamp asignado por el servidor
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Pin {
    /// ¿El pin fue creado por el usuario dado?
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username == username
    }
}

/// Payload de creación de pin (POST /api/pins).
/// El servidor asigna `_id` y `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPinRequest {
    pub username: String,
    pub title: String,
    pub desc: String,
    pub rating: u8,
    pub lat: f64,
    pub long: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pin_deserializes_backend_wire_format() {
        let raw = r#"{
            "_id": "61939ab3c5f4c25b2c1b1a7e",
            "username": "bob",
            "title": "Berlin",
            "desc": "Nice",
            "rating": 5,
            "lat": 52.52,
            "long": 13.408,
            "createdAt": "2021-11-16T12:34:56.000Z",
            "__v": 0
        }"#;

        let pin: Pin = serde_json::from_str(raw).unwrap();
        assert_eq!(pin.id, "61939ab3c5f4c25b2c1b1a7e");
        assert_eq!(pin.username, "bob");
        assert_eq!(pin.title, "Berlin");
        assert_eq!(pin.desc, "Nice");
        assert_eq!(pin.rating, 5);
        assert_eq!(pin.lat, 52.52);
        assert_eq!(pin.long, 13.408);
    }

    #[test]
    fn test_pin_rating_defaults_to_zero_when_missing() {
        // Pins antiguos creados con el formulario sin tocar no llevan rating
        let raw = r#"{
            "_id": "x",
            "username": "bob",
            "title": "t",
            "desc": "d",
            "lat": 1.0,
            "long": 2.0,
            "createdAt": "2021-11-16T12:34:56.000Z"
        }"#;

        let pin: Pin = serde_json::from_str(raw).unwrap();
        assert_eq!(pin.rating, 0);
    }

    #[test]
    fn test_new_pin_request_wire_payload() {
        let request = NewPinRequest {
            username: "alice".to_string(),
            title: "Berlin".to_string(),
            desc: "Nice".to_string(),
            rating: 5,
            lat: 10.0,
            long: 50.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "alice",
                "title": "Berlin",
                "desc": "Nice",
                "rating": 5,
                "lat": 10.0,
                "long": 50.0
            })
        );
    }

    #[test]
    fn test_is_owned_by() {
        let pin: Pin = serde_json::from_str(
            r#"{"_id":"x","username":"alice","title":"t","desc":"d",
                "rating":3,"lat":0.0,"long":0.0,
                "createdAt":"2021-11-16T12:34:56.000Z"}"#,
        )
        .unwrap();

        assert!(pin.is_owned_by("alice"));
        assert!(!pin.is_owned_by("bob"));
    }
}
