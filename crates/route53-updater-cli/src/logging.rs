//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// SDK internals that are only interesting at the highest verbosity.
const QUIET_DEPENDENCIES: &str =
    "aws_config=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn,hyper_util=warn";

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> String {
    match verbosity {
        0 => format!("warn,{QUIET_DEPENDENCIES}"),
        1 => format!("info,{QUIET_DEPENDENCIES}"),
        2 => format!("debug,{QUIET_DEPENDENCIES}"),
        _ => "trace".to_string(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Lines carry no timestamp or target so they scrape cleanly.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
