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

//! Centralized benchmark configuration.
//!
//! The binary has no configuration surface; it always runs with
//! [`BenchConfig::default`]. The builder methods exist for tests and for
//! library consumers driving the harness themselves.

use crate::error::{BenchError, Result};

/// Default warmup iterations per metric.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 100;

/// Default measured iterations for compile latency.
///
/// Compiling is comparatively expensive, so a small count suffices.
pub const DEFAULT_COMPILE_ITERATIONS: u64 = 100;

/// Default measured iterations for render latency.
///
/// Rendering is cheap and sensitive to clock jitter; a large count averages it out.
pub const DEFAULT_RENDER_ITERATIONS: u64 = 10_000;

/// Iteration counts for a benchmark run.
///
/// # Example
///
/// ```
/// use tmplbench::core::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_warmup_iterations(10)
///     .with_render_iterations(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Untimed iterations run before each metric's measurement.
    pub warmup_iterations: u64,
    /// Measured iterations for compile latency.
    pub compile_iterations: u64,
    /// Measured iterations for render latency.
    pub render_iterations: u64,
}

impl BenchConfig {
    /// Sets warmup iterations.
    pub fn with_warmup_iterations(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Sets measured compile iterations.
    pub fn with_compile_iterations(mut self, iterations: u64) -> Self {
        self.compile_iterations = iterations;
        self
    }

    /// Sets measured render iterations.
    pub fn with_render_iterations(mut self, iterations: u64) -> Self {
        self.render_iterations = iterations;
        self
    }

    /// Checks that every metric measures at least once.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("compile_iterations", self.compile_iterations),
            ("render_iterations", self.render_iterations),
        ] {
            if value == 0 {
                return Err(BenchError::InvalidConfig {
                    parameter: parameter.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            compile_iterations: DEFAULT_COMPILE_ITERATIONS,
            render_iterations: DEFAULT_RENDER_ITERATIONS,
        }
    }
}
