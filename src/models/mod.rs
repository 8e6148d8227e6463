pub mod pin;
pub mod user;

pub use pin::{NewPinRequest, Pin};
pub use user::{AuthUser, LoginRequest, RegisterRequest};
