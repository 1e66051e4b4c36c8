pub mod user;

pub use user::{use_user, UserContext, UserProvider};
