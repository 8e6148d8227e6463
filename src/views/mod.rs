pub mod app;
pub mod login;
pub mod pin_form;
pub mod pin_popup;
pub mod register;

pub use app::render_app;
pub use login::render_login;
pub use pin_form::render_pin_form;
pub use pin_popup::render_pin_popup;
pub use register::render_register;
