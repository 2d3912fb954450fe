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

//! A guided tour of function contracts: typed parameters, optional,
//! default and variable-arity arguments, overloads and a forward-only
//! counter. [`tour::run`] executes every demonstration in order.

pub mod basics;
pub mod calendar;
pub mod config;
pub mod console;
pub mod counter;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod overload;
pub mod params;
pub mod tour;
pub mod value;
