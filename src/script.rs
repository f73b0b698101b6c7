// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::{OsStr, OsString};
use std::fmt;

use tokio::process::Command;

/// Startup script resolved against the current working directory
#[cfg(unix)]
pub const STARTUP_SCRIPT: &str = "./start-all.sh";
#[cfg(windows)]
pub const STARTUP_SCRIPT: &str = "start-all.bat";

/// The external command the launcher runs
///
/// Nothing about what the command does is known here, only how to start it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    program: OsString,
    args: Vec<OsString>,
}

impl Script {
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// The fixed start-all script for this host
    #[cfg(unix)]
    pub fn startup() -> Self {
        Self::new(STARTUP_SCRIPT)
    }

    /// The fixed start-all script for this host
    ///
    /// Batch files only run under `cmd`, which also searches the working directory first.
    #[cfg(windows)]
    pub fn startup() -> Self {
        Self::new("cmd").arg("/C").arg(STARTUP_SCRIPT)
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::startup()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }

        Ok(())
    }
}
