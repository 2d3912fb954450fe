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
 * Tour Entry & Demo Sequencing
 * --------------------------------------------------------------------------
 * Runs every demonstration top to bottom against one console:
 *
 *  - basics.rs   → add, print_message, add_inferred, OPERATION
 *  - params.rs   → multiply, apply_discount, get_total
 *  - calendar.rs → print_days
 *  - overload.rs → overloaded_add, add_values, sum_operands
 *  - counter.rs  → Counter
 *
 * The first error stops the run. It is tagged with the name of the demo
 * that raised it and handed back to the caller.
 * --------------------------------------------------------------------------
 */

use std::io::Write;

use tracing::debug;

use crate::basics::{self, OPERATION};
use crate::calendar;
use crate::config::TourConfig;
use crate::console::Console;
use crate::counter::Counter;
use crate::display::{list_to_string, result_line};
use crate::error::Result;
use crate::overload::{self, Operands};
use crate::params;
use crate::value::Value;

type Demo<W> = fn(&str, &mut Console<W>, &TourConfig) -> Result<()>;

/// Names of the demos, in the order [`run`] executes them.
pub const DEMOS: [&str; 11] = [
    "add",
    "void",
    "inferred",
    "slot",
    "optional",
    "default",
    "calendar",
    "rest",
    "overload",
    "overload-optional",
    "counter",
];

/// Executes the whole tour.
pub fn run<W: Write>(console: &mut Console<W>, config: &TourConfig) -> Result<()> {
    let demos: [Demo<W>; 11] = [
        demo_add,
        demo_void,
        demo_inferred,
        demo_slot,
        demo_optional,
        demo_default,
        demo_calendar,
        demo_rest,
        demo_overload,
        demo_overload_optional,
        demo_counter,
    ];

    for (&name, demo) in DEMOS.iter().zip(demos) {
        debug!(demo = name, "running demo");
        demo(name, console, config).map_err(|e| e.in_demo(name))?;
    }

    console.flush()
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn demo_add<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let result = basics::add(2.0, 3.0);
    console.line(name, &result_line("add", &[num(2.0), num(3.0)], &num(result)))
}

fn demo_void<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    basics::print_message(console, name, "Hello from a function that returns nothing")
}

fn demo_inferred<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let result = basics::add_inferred(10.0, 15.0);
    console.line(
        name,
        &result_line("add_inferred", &[num(10.0), num(15.0)], &num(result)),
    )
}

fn demo_slot<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let result = OPERATION(7.0, 8.0);
    console.line(
        name,
        &result_line("operation", &[num(7.0), num(8.0)], &num(result)),
    )
}

fn demo_optional<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let calls: [(f64, f64, Option<f64>); 3] =
        [(5.0, 4.0, None), (1.0, 2.0, Some(3.0)), (1.0, 2.0, Some(0.0))];

    for (a, b, c) in calls {
        let mut args = vec![num(a), num(b)];
        args.extend(c.map(num));
        let result = params::multiply(a, b, c);
        console.line(name, &result_line("multiply", &args, &num(result)))?;
    }
    Ok(())
}

fn demo_default<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let result = params::apply_discount(100.0, None);
    console.line(
        name,
        &result_line("apply_discount", &[num(100.0)], &num(result)),
    )?;

    let result = params::apply_discount(100.0, Some(0.1));
    console.line(
        name,
        &result_line("apply_discount", &[num(100.0), num(0.1)], &num(result)),
    )?;

    let result = params::apply_discount_first(None, 200.0);
    console.line(
        name,
        &result_line(
            "apply_discount_first",
            &[Value::from("default"), num(200.0)],
            &num(result),
        ),
    )
}

fn demo_calendar<W: Write>(
    name: &str,
    console: &mut Console<W>,
    config: &TourConfig,
) -> Result<()> {
    let calls = [
        (7, Some(2022)),
        (11, Some(1992)),
        (2, Some(2000)),
        (2, Some(1900)),
        (2, None),
    ];

    for (month, year) in calls {
        let line = calendar::print_days_or(month, year, || {
            config.default_year.unwrap_or_else(calendar::current_year)
        })?;
        console.line(name, &line)?;
    }
    Ok(())
}

fn demo_rest<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let calls: [&[f64]; 3] = [&[], &[10.0, 20.0], &[10.0, 20.0, 30.0]];

    for numbers in calls {
        let args: Vec<Value> = numbers.iter().copied().map(num).collect();
        let result = params::get_total(numbers);
        console.line(name, &result_line("get_total", &args, &num(result)))?;
    }
    Ok(())
}

fn demo_overload<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let sum = overload::overloaded_add(1.0_f64, 1.0);
    console.line(
        name,
        &result_line("overloaded_add", &[num(1.0), num(1.0)], &num(sum)),
    )?;

    let joined = overload::overloaded_add("Hello", "!");
    console.line(
        name,
        &result_line(
            "overloaded_add",
            &[Value::from("Hello"), Value::from("!")],
            &Value::from(joined),
        ),
    )?;

    let pairs = [
        (num(4.0), num(6.0)),
        (Value::from("foo"), Value::from("bar")),
    ];
    for (a, b) in pairs {
        let args = [a.clone(), b.clone()];
        let result = overload::add_values(a, b)?;
        console.line(name, &result_line("add_values", &args, &result))?;
    }
    Ok(())
}

fn demo_overload_optional<W: Write>(
    name: &str,
    console: &mut Console<W>,
    _: &TourConfig,
) -> Result<()> {
    let shapes = [Operands::from((1.0, 2.0)), Operands::from((1.0, 2.0, 3.0))];

    for operands in shapes {
        let result = overload::sum_operands(operands);
        console.line(
            name,
            &result_line("sum_operands", &operands.to_values(), &num(result)),
        )?;
    }
    Ok(())
}

fn demo_counter<W: Write>(name: &str, console: &mut Console<W>, _: &TourConfig) -> Result<()> {
    let mut counter = Counter::new();

    let first = counter.advance();
    console.line(name, &format!("counter.advance() = {}", first))?;

    let steps = counter.advance_to(20);
    console.line(
        name,
        &format!("counter.advance_to(20) = {}", list_to_string(steps)),
    )
}
