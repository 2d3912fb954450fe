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

use std::fmt;

use crate::value::Value;

/// ============================================================================
/// value_to_string
/// ============================================================================
/// Converts a runtime `Value` into a **human-readable string**.
/// This is used by:
///   - the console transcript
///   - `Display for Value`
///
/// Examples:
///   - Number(3.14)     → "3.14"
///   - Number(5.0)      → "5"
///   - Text("cat")      → "cat"
/// ============================================================================
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Number(n) => n.to_string(),
        Value::Text(s) => s.clone(),
    }
}

/// ============================================================================
/// list_to_string
/// ============================================================================
/// Renders a sequence the way arrays print in the transcript:
///   - [1, 2, 3] → "[1, 2, 3]"
///   - []        → "[]"
///
/// Items are formatted through their own `Display`, so integers past 2^53
/// print exactly.
/// ============================================================================
pub fn list_to_string<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
    out
}

/// Formats a call site with its arguments, e.g. `add(2, 3)`.
pub fn call_to_string(name: &str, args: &[Value]) -> String {
    let inner = args
        .iter()
        .map(value_to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", name, inner)
}

/// Formats one transcript line of the form `call = result`.
pub fn result_line(name: &str, args: &[Value], result: &Value) -> String {
    format!("{} = {}", call_to_string(name, args), value_to_string(result))
}
