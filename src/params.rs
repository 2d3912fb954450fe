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
 * File:     params.rs
 * Purpose:  Optional, default and variable-arity parameters
 *
 *  - Optional values are `Option<f64>` in the trailing position
 *  - Defaults are `Option<f64>` resolved against a constant, in any position
 *  - Variable-arity input is a single trailing slice
 * --------------------------------------------------------------------------
 */

use crate::value::Value;

/// Discount applied when the caller omits one.
pub const DEFAULT_DISCOUNT: f64 = 0.05;

/// Multiplies `a` by `b`, and by `c` when `c` is given.
///
/// A supplied `c` that is falsy (`0` or `NaN`) is treated exactly like an
/// absent one, so `multiply(1.0, 2.0, Some(0.0))` is `2`.
pub fn multiply(a: f64, b: f64, c: Option<f64>) -> f64 {
    match c.filter(|c| Value::Number(*c).is_truthy()) {
        Some(c) => a * b * c,
        None => a * b,
    }
}

/// Scales `price` by `1 - discount`, with `discount` defaulting to
/// [`DEFAULT_DISCOUNT`].
pub fn apply_discount(price: f64, discount: Option<f64>) -> f64 {
    let discount = discount.unwrap_or(DEFAULT_DISCOUNT);
    price * (1.0 - discount)
}

/// [`apply_discount`] with the defaulted parameter in the leading position.
pub fn apply_discount_first(discount: Option<f64>, price: f64) -> f64 {
    apply_discount(price, discount)
}

/// Sums any number of values; an empty slice sums to `0`.
pub fn get_total(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// Calls [`get_total`] with zero or more comma-separated numbers.
///
/// ```
/// assert_eq!(fntour::total!(), 0.0);
/// assert_eq!(fntour::total!(10, 20, 30), 60.0);
/// ```
#[macro_export]
macro_rules! total {
    ($($x:expr),* $(,)?) => {
        $crate::params::get_total(&[$(($x) as f64),*])
    };
}
