/*
 * ==========================================================================
 * FNTOUR - A guided tour of function contracts
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the FNTOUR project.
 *
 * FNTOUR is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use fntour::config::TourConfig;
use fntour::console::Console;
use fntour::diagnostics::DiagnosticPrinter;
use fntour::error::Result;
use fntour::tour;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            DiagnosticPrinter::new(env!("CARGO_PKG_NAME")).print(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = TourConfig::from_env()?;
    debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), config.format);
    tour::run(&mut console, &config)
}

/// Logs go to stderr so stdout carries only the transcript.
fn init_logging() {
    let default_directive: Directive = format!("{}={}", env!("CARGO_CRATE_NAME"), LevelFilter::WARN)
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into());

    let filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
