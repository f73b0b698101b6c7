// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Launcher for the start-all script
//!
//! Prints a banner, runs the script, prints whether it succeeded and hands its exit code back.

mod error;
pub mod exit;
pub mod logging;
pub mod procs;
pub mod script;
pub mod spawn;

pub use error::{Error, ErrorKind};
pub use exit::{ExitCode, Outcome};
