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

use std::io::{self, Write};

use fntour::config::{OutputFormat, TourConfig};
use fntour::console::Console;
use fntour::tour::{self, DEMOS};

const TRANSCRIPT_2024: &str = "\
add(2, 3) = 5
Hello from a function that returns nothing
add_inferred(10, 15) = 25
operation(7, 8) = 15
multiply(5, 4) = 20
multiply(1, 2, 3) = 6
multiply(1, 2, 0) = 2
apply_discount(100) = 95
apply_discount(100, 0.1) = 90
apply_discount_first(default, 200) = 190
Month 7 of 2022 has 31 days
Month 11 of 1992 has 30 days
Month 2 of 2000 has 29 days
Month 2 of 1900 has 28 days
Month 2 of 2024 has 29 days
get_total() = 0
get_total(10, 20) = 30
get_total(10, 20, 30) = 60
overloaded_add(1, 1) = 2
overloaded_add(Hello, !) = Hello!
add_values(4, 6) = 10
add_values(foo, bar) = foobar
sum_operands(1, 2) = 3
sum_operands(1, 2, 3) = 6
counter.advance() = 1
counter.advance_to(20) = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20]
";

fn run_tour(config: &TourConfig) -> String {
    let mut console = Console::new(Vec::new(), config.format);
    tour::run(&mut console, config).expect("tour should succeed");
    String::from_utf8(console.into_inner()).expect("utf-8 output")
}

#[test]
fn text_transcript_matches_reference() {
    let config = TourConfig {
        format: OutputFormat::Text,
        default_year: Some(2024),
    };
    assert_eq!(run_tour(&config), TRANSCRIPT_2024);
}

#[test]
fn default_year_override_changes_only_last_calendar_line() {
    let config = TourConfig {
        format: OutputFormat::Text,
        default_year: Some(2023),
    };
    let out = run_tour(&config);
    assert!(out.contains("Month 2 of 2023 has 28 days\n"));
    assert!(!out.contains("Month 2 of 2024"));
    assert_eq!(out.lines().count(), TRANSCRIPT_2024.lines().count());
}

#[test]
fn json_transcript_has_one_record_per_line() {
    let config = TourConfig {
        format: OutputFormat::Json,
        default_year: Some(2024),
    };
    let out = run_tour(&config);

    let records: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("json record"))
        .collect();
    let lines: Vec<&str> = records
        .iter()
        .map(|r| r["line"].as_str().expect("line field"))
        .collect();
    assert_eq!(lines, TRANSCRIPT_2024.lines().collect::<Vec<_>>());

    for record in &records {
        let demo = record["demo"].as_str().expect("demo field");
        assert!(DEMOS.contains(&demo), "unexpected demo {demo}");
    }
    assert_eq!(records[1]["demo"], "void");
    assert_eq!(
        records[1]["line"],
        "Hello from a function that returns nothing"
    );
    assert_eq!(records.last().unwrap()["demo"], "counter");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_stops_the_tour_in_first_demo() {
    let mut console = Console::new(BrokenPipe, OutputFormat::Text);
    let err = tour::run(&mut console, &TourConfig::default()).unwrap_err();
    assert_eq!(err.code, "E_IO");
    assert_eq!(err.demo, Some("add"));
}

/// Accepts `lines` complete lines, then fails every write.
struct FailAfterLines {
    lines: usize,
}

impl Write for FailAfterLines {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.lines == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        let newlines = buf.iter().filter(|b| **b == b'\n').count();
        self.lines = self.lines.saturating_sub(newlines);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn error_tag_matches_json_demo_name() {
    let mut console = Console::new(FailAfterLines { lines: 1 }, OutputFormat::Json);
    let err = tour::run(&mut console, &TourConfig::default()).unwrap_err();
    assert_eq!(err.code, "E_IO");
    assert_eq!(err.demo, Some(DEMOS[1]));
    assert_eq!(DEMOS[1], "void");
}
