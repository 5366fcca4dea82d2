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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `config`: Iteration counts
//! - `measurement`: Samples and sample sets
//! - `timer`: Single-operation timing

pub mod config;
pub mod measurement;
pub mod timer;

pub use config::{
    BenchConfig, DEFAULT_COMPILE_ITERATIONS, DEFAULT_RENDER_ITERATIONS, DEFAULT_WARMUP_ITERATIONS,
};
pub use measurement::{FrozenSampleSet, MAX_RESERVED_SAMPLES, Metric, Sample, SampleSet};
pub use timer::{MonotonicTimer, Timer};
