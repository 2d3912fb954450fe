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

/*
 * --------------------------------------------------------------------------
 * File:     basics.rs
 * Purpose:  Plain function contracts
 *
 * Covers the simplest shapes a function can take:
 *  - Typed parameters and an explicit return type
 *  - Side-effect-only calls that return nothing
 *  - Return types derived from the parameter types
 *  - Function values stored in a typed slot
 * --------------------------------------------------------------------------
 */

use std::io::Write;
use std::ops::Add;

use crate::console::Console;
use crate::error::Result;

/// Shape of every value the `OPERATION` slot accepts.
///
/// Storing a function with another arity or return type in a slot of this
/// type is a compile error, not a runtime one.
///
/// Wrong arity:
///
/// ```compile_fail
/// use fntour::basics::BinaryNumberOp;
///
/// fn square(x: f64) -> f64 {
///     x * x
/// }
///
/// let slot: BinaryNumberOp = square;
/// ```
///
/// Wrong return type:
///
/// ```compile_fail
/// use fntour::basics::BinaryNumberOp;
///
/// fn join(a: f64, b: f64) -> String {
///     format!("{}{}", a, b)
/// }
///
/// let slot: BinaryNumberOp = join;
/// ```
pub type BinaryNumberOp = fn(f64, f64) -> f64;

/// A typed slot holding [`add`].
pub const OPERATION: BinaryNumberOp = add;

/// Adds two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Writes `message` to the console exactly as given, attributed to `demo`.
pub fn print_message<W: Write>(console: &mut Console<W>, demo: &str, message: &str) -> Result<()> {
    console.line(demo, message)
}

/// Same as [`add`], but the output type is whatever `T + T` produces.
pub fn add_inferred<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn add_sums() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.5, 1.5), 0.0);
    }

    #[test]
    fn inferred_matches_explicit() {
        assert_eq!(add_inferred(10.0, 15.0), add(10.0, 15.0));
        assert_eq!(add_inferred(10_i64, 15), 25);
    }

    #[test]
    fn slot_calls_add() {
        assert_eq!(OPERATION(7.0, 8.0), 15.0);

        let slots: [BinaryNumberOp; 2] = [OPERATION, |a, b| a * b];
        let results: Vec<f64> = slots.iter().map(|op| op(7.0, 8.0)).collect();
        assert_eq!(results, vec![15.0, 56.0]);
    }

    #[test]
    fn print_message_writes_verbatim() {
        let mut console = Console::new(Vec::new(), OutputFormat::Text);
        print_message(&mut console, "void", "  spaced  ").unwrap();
        assert_eq!(console.into_inner(), b"  spaced  \n");
    }
}
