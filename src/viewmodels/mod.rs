pub mod map_viewmodel;
pub mod pin_viewmodel;
pub mod session_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use pin_viewmodel::PinViewModel;
pub use session_viewmodel::SessionViewModel;
