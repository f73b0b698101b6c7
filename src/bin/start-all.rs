// Copyright 2019 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io;

use clap::App;
use tokio::runtime;
use tracing::debug;

use start_all::logging;
use start_all::procs::Launcher;
use start_all::{Error, ExitCode};

fn main() {
    // no arguments, but still answer --help and --version
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .get_matches();

    logging::init();

    let code = match launch() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    };

    std::process::exit(code.code());
}

fn launch() -> Result<ExitCode, Error> {
    let mut runtime = runtime::Builder::new()
        .basic_scheduler()
        .enable_io()
        .build()?;

    let launcher = Launcher::default();
    debug!(script = %launcher.script(), "{} starting", Launcher::NAME);

    let outcome = runtime.block_on(launcher.run(&mut io::stdout()));
    Ok(outcome.exit_code())
}
