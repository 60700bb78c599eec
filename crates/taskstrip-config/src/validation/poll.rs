//! Validation for polling cadence.

use crate::schema::TaskstripConfig;

use super::helpers::validate_range;

pub(crate) fn validate_poll(errors: &mut Vec<String>, config: &TaskstripConfig) {
    validate_range(errors, "poll.interval_ms", config.poll.interval_ms, 100, 60_000);
}
