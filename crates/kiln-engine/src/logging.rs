//! One-time logger setup over the `log` facade.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once; later calls are no-ops.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies (pass e.g.
/// `"info"` or `"kiln_sandbox=debug,wgpu=warn"`). Call early in `main`.
pub fn init(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(default_filter);
        }
        builder.init();
        log::debug!("logging initialized");
    });
}
