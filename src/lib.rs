mod clock;
mod config;
mod env_file;
mod error;
pub mod http;
mod server;
#[cfg(test)]
mod tests;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, Transport};
pub use env_file::EnvFile;
pub use error::{Error, Result};
pub use server::{AddRequest, SERVER_NAME, Server, TimeQuery};
