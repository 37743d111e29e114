#[cfg(test)]
#[path = "../../tests/unit/utils/time_test.rs"]
mod time_test;

use crate::models::{ModelError, ModelResult};
use crate::utils::Float;

const SECONDS_PER_HOUR: Float = 3600.;
const SECONDS_PER_MINUTE: Float = 60.;

/// Parses a time of day given as `H[:MM[:SS]]` with an optional case-insensitive `AM`/`PM` suffix
/// into seconds since midnight. Whitespace between the time and the suffix is allowed.
///
/// `12AM` is treated as midnight and `12PM` as noon.
pub fn parse_time_to_seconds(time: &str) -> ModelResult<Float> {
    let invalid = |reason: &str| ModelError::InvalidValue { field: "time".to_string(), reason: reason.to_string() };

    let normalized = time.trim().to_ascii_lowercase();
    let (clock, meridiem) = if let Some(clock) = normalized.strip_suffix("am") {
        (clock.trim_end(), Some(false))
    } else if let Some(clock) = normalized.strip_suffix("pm") {
        (clock.trim_end(), Some(true))
    } else {
        (normalized.as_str(), None)
    };

    if !clock.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid(&format!("'{time}' has no digits")));
    }

    let parts = clock
        .split(':')
        .map(|part| part.trim().parse::<u32>().map_err(|_| invalid(&format!("cannot parse '{part}' in '{time}'"))))
        .collect::<Result<Vec<_>, _>>()?;

    let (hours, minutes, seconds) = match parts.as_slice() {
        [h] => (*h, 0, 0),
        [h, m] => (*h, *m, 0),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(invalid(&format!("'{time}' has too many components"))),
    };

    if minutes >= 60 || seconds >= 60 {
        return Err(invalid(&format!("'{time}' has minutes or seconds out of range")));
    }

    let hours = match meridiem {
        Some(_) if hours == 0 || hours > 12 => return Err(invalid(&format!("'{time}' is not a 12-hour clock time"))),
        Some(false) => hours % 12,
        Some(true) => hours % 12 + 12,
        None => hours,
    };

    Ok(hours as Float * SECONDS_PER_HOUR + minutes as Float * SECONDS_PER_MINUTE + seconds as Float)
}
