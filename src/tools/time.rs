use crate::{Clock, Error, Result};
use chrono_tz::Tz;

/// Timezone used when the caller omits one.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Looks up an IANA timezone by name, e.g. `Europe/Berlin` or `UTC`.
pub fn resolve_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimeZone(name.to_string()))
}

/// Returns the clock's current instant in `tz` as ISO-8601 with second
/// precision and a `±HH:MM` offset.
pub fn current_time(clock: &dyn Clock, tz: &str) -> Result<String> {
    let tz = resolve_time_zone(tz)?;
    let local = clock.now().with_timezone(&tz);
    Ok(local.format("%Y-%m-%dT%H:%M:%S%:z").to_string())
}
