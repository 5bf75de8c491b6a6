use tracing_subscriber::EnvFilter;

/// Targets whose events are shown: the calculator library and this binary.
const CRATE_TARGETS: &[&str] = &["timecalc", "timecalc_cli"];

/// Install the stderr subscriber for the `timecalc` binary.
///
/// With no `-v` only rejected requests (warn) are reported; `-v` adds the
/// per-request status line, `-vv` the parsed inputs, `-vvv` everything.
/// A set `RUST_LOG` replaces this filter entirely. Stdout stays reserved
/// for results so `--json` and `--api` output can be piped.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
