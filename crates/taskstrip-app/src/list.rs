//! `--list`: one reconciliation pass, printed instead of shown.

use std::io::Write;

use taskstrip_common::TaskstripError;
use taskstrip_config::TaskstripConfig;
use taskstrip_core::{PollOutcome, ReconciliationEngine};
use taskstrip_gateway::WindowManagerGateway;

use crate::app_state::StripLayout;

/// Write the windows the panel would show to `out`, one `handle  name`
/// line each, in strip order.
pub fn list_windows(
    config: &TaskstripConfig,
    gateway: Box<dyn WindowManagerGateway>,
    out: &mut impl Write,
) -> Result<usize, TaskstripError> {
    let mut engine = ReconciliationEngine::from_config(gateway, &config.poll);
    let mut strip = StripLayout::new(&config.panel);

    engine.connect()?;
    if let PollOutcome::Skipped(e) = engine.poll(&mut strip) {
        engine.shutdown(&mut strip);
        return Err(e.into());
    }

    for entry in strip.entries() {
        writeln!(out, "{}  {}", entry.handle(), entry.display_name())?;
    }
    let count = strip.len();
    engine.shutdown(&mut strip);
    Ok(count)
}
