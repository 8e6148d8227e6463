pub mod api_client;
pub mod session_service;

pub use api_client::{ApiClient, NetworkError};
pub use session_service::SessionService;
