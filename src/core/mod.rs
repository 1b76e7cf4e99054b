pub mod address;
pub mod faker;
pub mod hotel;
pub mod launcher;
pub mod seed_engine;
pub mod sql;

pub use crate::domain::model::{Address, AddressRef, GeneratedSeed, Hotel};
pub use crate::domain::ports::{CommandRunner, Storage};
pub use crate::utils::error::Result;
