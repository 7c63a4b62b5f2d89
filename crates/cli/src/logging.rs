//! Logging setup for the binary.
//!
//! Invariants:
//! - The subscriber is installed exactly once, before any work starts.
//! - A non-empty `RUST_LOG` replaces the flag-derived filter entirely.
//! - Third-party crates stay at `warn` unless `RUST_LOG` says otherwise.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Targets whose level follows `--verbose` / `--debug`.
///
/// Events in `main.rs` carry the binary's target, not the package name.
const WORKSPACE_CRATES: [&str; 4] = [
    "nr_dashboard_utility",
    "nerdgraph_migrate",
    "nerdgraph_client",
    "nerdgraph_config",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Info,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `--debug` wins over `--verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Info
        }
    }

    fn level(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// `EnvFilter` directives for a verbosity.
pub fn filter_directives(verbosity: Verbosity) -> String {
    let level = verbosity.level();
    let crates: Vec<String> = WORKSPACE_CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect();
    format!("warn,{}", crates.join(","))
}

pub fn init(verbosity: Verbosity) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::new(filter_directives(verbosity)),
    };

    let ansi = std::io::IsTerminal::is_terminal(&std::io::stdout());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_ansi(ansi))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Info);
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(
            filter_directives(Verbosity::Info),
            "warn,nr_dashboard_utility=info,nerdgraph_migrate=info,nerdgraph_client=info,nerdgraph_config=info"
        );
        assert!(!filter_directives(Verbosity::Info).contains("nerdgraph_cli"));
        assert!(filter_directives(Verbosity::Debug).contains("nerdgraph_client=trace"));
        assert!(filter_directives(Verbosity::Verbose).contains("nerdgraph_migrate=debug"));
    }

    #[test]
    fn test_binary_target_matches_module_path() {
        let binary_target = module_path!().split("::").next().unwrap();
        assert_eq!(binary_target, "nr_dashboard_utility");
        assert!(WORKSPACE_CRATES.contains(&binary_target));
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in [Verbosity::Info, Verbosity::Verbose, Verbosity::Debug] {
            assert!(EnvFilter::try_new(filter_directives(verbosity)).is_ok());
        }
    }
}
