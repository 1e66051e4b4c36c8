pub mod age;
pub mod constants;
pub mod contact;
pub mod masks;
pub mod storage;

pub use constants::*;
pub use storage::{has_storage_key, load_from_storage, remove_from_storage, save_to_storage};
