pub mod car;
pub mod category;
pub mod user;

pub use car::{remove_car_by_id, Car, NewCar, NewCarErrors};
pub use category::Category;
pub use user::{SessionData, UserData};
