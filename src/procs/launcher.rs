// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::exit::{ExitCode, Outcome};
use crate::script::Script;
use crate::spawn::{self, StdIoConf};

pub const BANNER: &str = "Starting all services...";
pub const SUCCESS: &str = "Services started successfully!";
pub const FAILURE: &str = "Error starting services. Please check the startup script.";

/// Launch the services
///
/// Rules:
/// - banner is written, and flushed, before the script starts
/// - a failed write to stdout is logged, it never stops the script or changes its code
/// - exactly one script run, no retries
/// - the script's exit code is the result, whether it failed to start or exited non-zero
#[derive(Debug, Default)]
pub struct Launcher {
    script: Script,
}

impl Launcher {
    pub const NAME: &'static str = "launcher";

    pub fn new(script: Script) -> Self {
        Self { script }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn get_stdio() -> StdIoConf {
        StdIoConf::inherit()
    }

    /// Runs the script to completion, writing the banner and result lines to `out`
    ///
    /// Failing to write to `out` never stops the script or changes its exit code.
    pub async fn run<W: Write>(self, out: &mut W) -> Outcome {
        print_line(out, BANNER);

        let code = match spawn::run_to_exit(&self.script, Self::get_stdio()).await {
            Ok(status) => {
                info!(script = %self.script, %status, "startup script exited");
                ExitCode::from(status)
            }
            Err(err) => {
                debug!(script = %self.script, error = %err, "startup script did not run");
                ExitCode::from(&err)
            }
        };

        let outcome = Outcome::from(code);
        if outcome.is_success() {
            print_line(out, SUCCESS);
        } else {
            print_line(out, FAILURE);
        }

        outcome
    }
}

fn print_line<W: Write>(out: &mut W, line: &str) {
    if let Err(err) = writeln!(out, "{}", line).and_then(|()| out.flush()) {
        warn!(error = %err, "failed to write to stdout");
    }
}
