pub mod app;
pub mod car_card;
pub mod error_message;
pub mod loading;
pub mod modal_description;
pub mod private_route;
pub mod toaster;

pub use app::App;
pub use car_card::CarCard;
pub use error_message::ErrorMessage;
pub use loading::Loading;
pub use modal_description::ModalDescription;
pub use private_route::PrivateRoute;
pub use toaster::{use_toaster, ToasterHandle, ToasterProvider};
