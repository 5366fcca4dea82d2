// tmplbench - Template Engine Micro-Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchmark reporters.
//!
//! Reporters consume only the finished [`Report`]; they never see samples or
//! timers, so new output formats can be added without touching measurement.
//!
//! # Modules
//!
//! - `types`: Report data structures
//! - `console`: Fixed-layout text report
//! - `json`: JSON export

pub mod console;
pub mod json;
pub mod types;

pub use console::{format_report, print_report, write_report};
pub use json::export_json;
pub use types::{CaseReport, MetricOutcome, MetricReport, Report};
