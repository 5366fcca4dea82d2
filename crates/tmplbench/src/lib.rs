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

//! Template Engine Micro-Benchmark Harness
//!
//! Measures compile and render latency of a template engine across three
//! complexity tiers.
//!
//! ## Features
//!
//! - **Controlled warmup**: every metric warms up before its first sample
//! - **Isolated timing**: one sample per engine call, compile and render apart
//! - **Order-independent statistics**: mean and median over frozen sample sets
//! - **Pluggable engines and clocks**: [`engine::TemplateEngine`] and [`core::Timer`]
//!
//! ## Usage
//!
//! Run the standard suite:
//! ```bash
//! cargo run --release --bin tmplbench
//! ```
//!
//! Drive the harness from code:
//! ```no_run
//! use tmplbench::{scenarios, BenchConfig, BenchmarkRunner, MiniJinjaEngine, MonotonicTimer};
//!
//! let cases = scenarios::standard_cases(&BenchConfig::default()).unwrap();
//! let mut runner = BenchmarkRunner::new(MiniJinjaEngine::new).with_cases(cases);
//! let report = runner.run_all(&mut MonotonicTimer::new()).unwrap();
//! tmplbench::reporters::print_report(&report).unwrap();
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod harness;
pub mod reporters;
pub mod scenarios;

pub use crate::core::{BenchConfig, Metric, MonotonicTimer, Sample, SampleSet, Timer};
pub use engine::{CompiledTemplate, Context, MiniJinjaEngine, TemplateEngine};
pub use error::{BenchError, CaseError, CompileError, RenderError, Result, TimerError};
pub use harness::{BenchmarkCase, BenchmarkRunner, CaseState, Statistics};
pub use reporters::Report;
