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
 * File:     overload.rs
 * Purpose:  Behaviour selected by argument shape
 *
 * Two flavours:
 *  - Statically typed shapes through the `OverloadedAdd` trait
 *    (Number, Number) → Number and (String, String) → String
 *  - A union-typed `add_values` over the `Value` tag, which rejects
 *    mixed operands with `E_TYPE`
 *
 * `Operands` shows an overload whose shapes differ only by an optional
 * trailing argument.
 * --------------------------------------------------------------------------
 */

use crate::error::{Result, TourError};
use crate::value::Value;

/// Adds or concatenates two operands of the same shape.
pub trait OverloadedAdd: Sized {
    type Output;

    fn overloaded_add(self, other: Self) -> Self::Output;
}

impl OverloadedAdd for f64 {
    type Output = f64;

    fn overloaded_add(self, other: Self) -> f64 {
        self + other
    }
}

impl OverloadedAdd for String {
    type Output = String;

    fn overloaded_add(mut self, other: Self) -> String {
        self.push_str(&other);
        self
    }
}

impl OverloadedAdd for &str {
    type Output = String;

    fn overloaded_add(self, other: Self) -> String {
        [self, other].concat()
    }
}

/// Free-function form of [`OverloadedAdd`].
pub fn overloaded_add<T: OverloadedAdd>(a: T, b: T) -> T::Output {
    a.overloaded_add(b)
}

/// Union-typed add.
///
/// - Number + Number → sum
/// - String + String → concatenation
/// - anything mixed  → `E_TYPE`
pub fn add_values(a: Value, b: Value) -> Result<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x + y)),
        (Value::Text(x), Value::Text(y)) => Ok(Value::Text(x + &y)),
        (x, y) => Err(TourError::type_mismatch(x.type_name(), y.type_name())),
    }
}

/// Arguments of the two-or-three number overload.
///
/// `a` and `b` are mandatory in every shape; only `c` may be left out.
///
/// ```
/// use fntour::overload::{sum_operands, Operands};
///
/// assert_eq!(sum_operands((1.0, 2.0)), 3.0);
/// assert_eq!(Operands::from((1.0, 2.0, 3.0)).c, Some(3.0));
/// ```
///
/// A single argument is not one of the shapes:
///
/// ```compile_fail
/// use fntour::overload::Operands;
///
/// let operands = Operands::from((1.0,));
/// ```
///
/// ```compile_fail
/// fntour::overload::sum_operands((1.0,));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
    pub c: Option<f64>,
}

impl From<(f64, f64)> for Operands {
    fn from((a, b): (f64, f64)) -> Self {
        Self { a, b, c: None }
    }
}

impl From<(f64, f64, f64)> for Operands {
    fn from((a, b, c): (f64, f64, f64)) -> Self {
        Self { a, b, c: Some(c) }
    }
}

impl Operands {
    /// The operands as display values, in call order.
    pub fn to_values(&self) -> Vec<Value> {
        let mut values = vec![Value::Number(self.a), Value::Number(self.b)];
        if let Some(c) = self.c {
            values.push(Value::Number(c));
        }
        values
    }
}

/// Sums two or three numbers.
pub fn sum_operands(operands: impl Into<Operands>) -> f64 {
    let Operands { a, b, c } = operands.into();
    a + b + c.unwrap_or(0.0)
}
