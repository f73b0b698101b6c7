// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Exit codes passed from the startup script through to the host

use std::fmt;
use std::io;
use std::process::ExitStatus;

/// The integer status handed back to the calling environment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Generic failure, used when nothing more specific is known
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The script exists but could not be executed
    pub const NOT_EXECUTABLE: ExitCode = ExitCode(126);
    /// The script could not be found
    pub const NOT_FOUND: ExitCode = ExitCode(127);

    /// Offset added to a signal number when the child was killed by that signal
    pub const SIGNAL_BASE: i32 = 128;

    pub fn new(code: i32) -> Self {
        ExitCode(code)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitCode(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;

            if let Some(signal) = status.signal() {
                return ExitCode(Self::SIGNAL_BASE + signal);
            }
        }

        Self::FAILURE
    }
}

/// Spawning or waiting on the script failed, collapse the cause into a non-zero code
impl From<&io::Error> for ExitCode {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NOT_FOUND,
            io::ErrorKind::PermissionDenied => Self::NOT_EXECUTABLE,
            _ => Self::FAILURE,
        }
    }
}

/// The `Finished` state of the launcher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The startup script exited with 0
    Started,
    /// The startup script exited non-zero or never ran
    LaunchFailed(ExitCode),
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Started => ExitCode::SUCCESS,
            Outcome::LaunchFailed(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Started
    }
}

impl From<ExitCode> for Outcome {
    fn from(code: ExitCode) -> Self {
        if code.is_success() {
            Outcome::Started
        } else {
            Outcome::LaunchFailed(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_started() {
        let outcome = Outcome::from(ExitCode::new(0));

        assert_eq!(outcome, Outcome::Started);
        assert!(outcome.is_success());
        assert_eq!(outcome.exit_code(), ExitCode::SUCCESS);
    }

    #[test]
    fn non_zero_codes_pass_through() {
        for code in &[1, 2, 42, 255, -1] {
            let outcome = Outcome::from(ExitCode::new(*code));

            assert_eq!(outcome, Outcome::LaunchFailed(ExitCode::new(*code)));
            assert!(!outcome.is_success());
            assert_eq!(outcome.exit_code().code(), *code);
        }
    }

    #[test]
    fn spawn_errors_are_never_success() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "missing");
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let other = io::Error::new(io::ErrorKind::Other, "weird");

        assert_eq!(ExitCode::from(&not_found), ExitCode::NOT_FOUND);
        assert_eq!(ExitCode::from(&denied), ExitCode::NOT_EXECUTABLE);
        assert_eq!(ExitCode::from(&other), ExitCode::FAILURE);
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_codes_and_signals() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) encodings: code in the high byte, signal in the low bits
        assert_eq!(ExitCode::from(ExitStatus::from_raw(0)), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(ExitStatus::from_raw(3 << 8)), ExitCode::new(3));
        assert_eq!(ExitCode::from(ExitStatus::from_raw(9)), ExitCode::new(137));
    }
}
