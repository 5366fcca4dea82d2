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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `case`: Warmup and measurement protocol for one scenario
//! - `aggregator`: Mean/median statistics over sample sets
//! - `runner`: Sequential driver over all cases

pub mod aggregator;
pub mod case;
pub mod runner;

pub use aggregator::{mean, median, Statistics};
pub use case::{BenchmarkCase, CaseBuilder, CaseState, ContextSource, MetricPlan};
pub use runner::BenchmarkRunner;
