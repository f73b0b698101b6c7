// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Diagnostics for debugging the launcher
//!
//! Stdout carries only the banner and result lines, so every event here goes to stderr:
//!
//! - `debug`: the script about to be spawned, and why it could not be spawned
//! - `info`: the script's exit status
//! - `warn`: a banner or result line that could not be written
//!
//! ```bash
//! RUST_LOG=start_all=debug start-all
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber, filtered by `RUST_LOG` or else `DEFAULT_FILTER`
///
/// `warn` keeps a normal run silent apart from stdout write failures.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
