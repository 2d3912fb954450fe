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

use crate::error::TourError;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for tour errors.
///
/// This printer:
/// - Formats errors with their stable code
/// - Names the demo that was running when the error was raised
/// - Optionally shows a helpful follow-up hint
///
/// The output is modelled on `rustc` diagnostics, but stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Name of the program being run, used only for display.
    program: String,
}

impl DiagnosticPrinter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Renders a diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E_MONTH]: invalid month: 13
    ///   --> fntour: calendar
    ///
    /// help: Months are numbered 1 (January) through 12 (December).
    /// ```
    pub fn render(&self, error: &TourError) -> String {
        let mut out = format!("error[{}]: {}\n", error.code, error.message);

        // Errors raised before any demo started only name the program.
        match error.demo {
            Some(demo) => out.push_str(&format!("  --> {}: {}\n", self.program, demo)),
            None => out.push_str(&format!("  --> {}\n", self.program)),
        }

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &TourError) {
        eprint!("{}", self.render(error));
    }
}
