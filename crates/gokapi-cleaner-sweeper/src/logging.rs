use std::io::IsTerminal;

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Target prefix shared by the binary and every workspace crate.
const TARGET_PREFIX: &str = "gokapi_cleaner";

/// Filter used when `RUST_LOG` is unset: dependencies at warn,
/// our crates at info (or debug when verbose).
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,{TARGET_PREFIX}={level}")
}

/// Install the global stdout subscriber. Call once, before the sweep starts.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_timer(ChronoLocal::new("[%H:%M:%S]".to_string()))
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_directives() {
        let d = default_directives(false);
        assert!(d.starts_with("warn,"));
        assert_eq!(d, "warn,gokapi_cleaner=info");
        assert!(!d.contains("debug"));
    }

    #[test]
    fn verbose_directives_parse() {
        let d = default_directives(true);
        assert_eq!(d, "warn,gokapi_cleaner=debug");
        assert!(EnvFilter::try_new(&d).is_ok());
    }
}
