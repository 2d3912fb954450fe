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

use thiserror::Error;

/// Convenience alias used by every fallible tour operation.
pub type Result<T> = std::result::Result<T, TourError>;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TourError {
    /// Stable error code (E_MONTH, E_TYPE, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Demo that was running when the error was raised
    pub demo: Option<&'static str>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl TourError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            demo: None,
            help: None,
        }
    }

    /// Month number outside 1..=12
    pub fn invalid_month(month: u32) -> Self {
        Self::new("E_MONTH", format!("invalid month: {}", month))
            .with_help("Months are numbered 1 (January) through 12 (December).")
    }

    /// Operand tags that cannot be combined
    pub fn type_mismatch(left: &str, right: &str) -> Self {
        Self::new(
            "E_TYPE",
            format!("type mismatch: cannot add {} and {}", left, right),
        )
        .with_help("Both operands must be Numbers or both must be Strings.")
    }

    /// Bad environment configuration
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::new("E_CONFIG", message)
    }

    /// Output sink failure
    pub fn io_error(err: std::io::Error) -> Self {
        Self::new("E_IO", format!("failed to write output: {}", err))
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Record which demo raised the error, keeping the innermost one.
    pub fn in_demo(mut self, demo: &'static str) -> Self {
        if self.demo.is_none() {
            self.demo = Some(demo);
        }
        self
    }
}

impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<serde_json::Error> for TourError {
    fn from(err: serde_json::Error) -> Self {
        Self::new("E_IO", format!("failed to encode output record: {}", err))
    }
}
