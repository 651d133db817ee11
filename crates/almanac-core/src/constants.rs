/// Timezone used when neither the configuration nor the caller names one.
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "UTC";

/// Default ceiling on the number of local days walked for a single event.
///
/// Ten years of days; anything longer is almost certainly bad data.
pub const DEFAULT_MAX_DAYS: u32 = 3660;

/// Joins an event identity and a sequence index into an occurrence id.
pub const OCCURRENCE_ID_SEPARATOR: char = '.';

/// Joins an entity id and a field name into an event identity.
pub const IDENTITY_SEPARATOR: char = '.';

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment variable overrides, e.g. `ALMANAC_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "ALMANAC";
