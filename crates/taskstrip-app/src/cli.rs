use std::path::PathBuf;

use clap::Parser;
use taskstrip_config::TaskstripConfig;

/// taskstrip: a minimal X11 taskbar listing the open windows.
#[derive(Parser, Debug, Default)]
#[command(name = "taskstrip", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `taskstrip=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Reconciliation interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u32>,

    /// X display to connect to instead of `$DISPLAY`.
    #[arg(long, value_name = "NAME")]
    pub display: Option<String>,

    /// Print the windows the panel would show, then exit.
    #[arg(long, conflicts_with = "print_config")]
    pub list: bool,

    /// Print the effective configuration as JSON, then exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Fold command-line overrides into `config`.
    pub fn apply_overrides(&self, config: &mut TaskstripConfig) {
        if let Some(ms) = self.poll_interval_ms {
            config.poll.interval_ms = ms;
        }
        if let Some(ref display) = self.display {
            config.gateway.display = Some(display.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "taskstrip",
            "--config",
            "/tmp/panel.toml",
            "--log-level",
            "taskstrip=debug",
            "--poll-interval-ms",
            "250",
            "--display",
            ":1",
            "--list",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/panel.toml")));
        assert_eq!(args.log_level.as_deref(), Some("taskstrip=debug"));
        assert_eq!(args.poll_interval_ms, Some(250));
        assert_eq!(args.display.as_deref(), Some(":1"));
        assert!(args.list);
        assert!(!args.print_config);
    }

    #[test]
    fn list_and_print_config_conflict() {
        assert!(Args::try_parse_from(["taskstrip", "--list", "--print-config"]).is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let args = Args {
            poll_interval_ms: Some(250),
            display: Some(":2".into()),
            ..Args::default()
        };
        let mut config = TaskstripConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.gateway.display.as_deref(), Some(":2"));
    }

    #[test]
    fn no_overrides_keep_config() {
        let mut config = TaskstripConfig::default();
        Args::default().apply_overrides(&mut config);
        assert_eq!(config.poll.interval_ms, 1000);
        assert!(config.gateway.display.is_none());
    }
}
