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

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// One JSON transcript record.
#[derive(Debug, Serialize)]
struct Record<'a> {
    demo: &'a str,
    line: &'a str,
}

/// Ordered output sink for the tour transcript.
///
/// Every demo writes through this type instead of calling `println!`
/// directly, so tests can capture the transcript in memory.
pub struct Console<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Writes one line attributed to `demo`.
    pub fn line(&mut self, demo: &str, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", text)?,
            OutputFormat::Json => {
                let record = serde_json::to_string(&Record { demo, line: text })?;
                writeln!(self.out, "{}", record)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
