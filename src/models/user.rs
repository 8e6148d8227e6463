// ============================================================================
// USER - Modelos de autenticación
// ============================================================================
// La autenticación vive en el backend; estos structs son solo el wire format
// de los formularios de login/registro.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Credenciales de login (POST /api/users/login)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Datos de registro (POST /api/users/register)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Usuario devuelto por el backend tras un login exitoso
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_deserializes_mongo_id() {
        let user: AuthUser =
            serde_json::from_str(r#"{"_id":"61939ab3","username":"alice"}"#).unwrap();
        assert_eq!(user.id, "61939ab3");
        assert_eq!(user.username, "alice");
    }
}
