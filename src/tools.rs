//! Pure tool logic, independent of the MCP transport.

pub mod add;
pub mod time;

pub use add::add;
pub use time::{DEFAULT_TIMEZONE, current_time, resolve_time_zone};
