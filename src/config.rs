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

use std::str::FromStr;

use crate::error::{Result, TourError};

/// Environment variable selecting the transcript format.
pub const FORMAT_VAR: &str = "FNTOUR_FORMAT";

/// Environment variable pinning the calendar's default year.
pub const YEAR_VAR: &str = "FNTOUR_YEAR";

/// How transcript lines are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One plain line per result
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TourError::config_error(format!(
                "{} must be `text` or `json`, got `{}`",
                FORMAT_VAR, other
            ))),
        }
    }
}

/// Runtime settings for one tour run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourConfig {
    pub format: OutputFormat,

    /// Year used when the calendar demo omits one.
    /// `None` means "ask the clock".
    pub default_year: Option<i32>,
}

impl TourConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        let default_year = match lookup(YEAR_VAR) {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|e| {
                TourError::config_error(format!("{} is not a year (`{}`): {}", YEAR_VAR, raw, e))
            })?),
            None => None,
        };

        Ok(Self {
            format,
            default_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = TourConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn reads_format_and_year() {
        let config =
            TourConfig::from_lookup(lookup(&[(FORMAT_VAR, "JSON"), (YEAR_VAR, " 2024 ")])).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_year, Some(2024));
    }

    #[test]
    fn rejects_bad_values() {
        let err = TourConfig::from_lookup(lookup(&[(FORMAT_VAR, "yaml")])).unwrap_err();
        assert_eq!(err.code, "E_CONFIG");

        let err = TourConfig::from_lookup(lookup(&[(YEAR_VAR, "next")])).unwrap_err();
        assert_eq!(err.code, "E_CONFIG");
    }
}
