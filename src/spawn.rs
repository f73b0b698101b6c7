// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io;
use std::process::{ExitStatus, Stdio};

use tracing::debug;

use crate::script::Script;

pub struct StdIoConf {
    pub stdin: Stdio,
    pub stderr: Stdio,
    pub stdout: Stdio,
}

impl StdIoConf {
    /// Child shares the terminal with us, its output interleaves with ours
    pub fn inherit() -> Self {
        StdIoConf {
            stdin: Stdio::inherit(),
            stderr: Stdio::inherit(),
            stdout: Stdio::inherit(),
        }
    }
}

/// Spawns the script and waits for it to exit
///
/// There is no timeout, a script that never exits blocks this forever.
pub async fn run_to_exit(script: &Script, stdio: StdIoConf) -> io::Result<ExitStatus> {
    let mut command = script.command();
    command
        .kill_on_drop(false)
        .stdin(stdio.stdin)
        .stdout(stdio.stdout)
        .stderr(stdio.stderr);

    debug!(script = %script, "spawning");
    command.status().await
}
