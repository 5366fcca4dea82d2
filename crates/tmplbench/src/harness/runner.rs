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

//! Sequential driver over all benchmark cases.
//!
//! Cases run one after another on the calling thread. Each case gets its own
//! engine from the factory, so engine caches are warmed within a case but
//! never shared between cases.

use crate::core::Timer;
use crate::engine::TemplateEngine;
use crate::error::Result;
use crate::harness::case::BenchmarkCase;
use crate::reporters::types::Report;
use tracing::{error, info};

/// Runs registered cases and collects their results into a [`Report`].
pub struct BenchmarkRunner<F> {
    factory: F,
    cases: Vec<BenchmarkCase>,
}

impl<F, E> BenchmarkRunner<F>
where
    F: FnMut() -> E,
    E: TemplateEngine,
{
    /// Creates a runner that builds a fresh engine per case with `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cases: Vec::new(),
        }
    }

    /// Registers a case. Cases run in registration order.
    pub fn register(&mut self, case: BenchmarkCase) {
        self.cases.push(case);
    }

    /// Registers several cases.
    pub fn with_cases(mut self, cases: impl IntoIterator<Item = BenchmarkCase>) -> Self {
        self.cases.extend(cases);
        self
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Runs every case in order.
    ///
    /// Case failures are recorded in the report and the run continues. A
    /// timer failure aborts immediately with [`BenchError::Timer`].
    ///
    /// [`BenchError::Timer`]: crate::error::BenchError::Timer
    pub fn run_all<T: Timer + ?Sized>(&mut self, timer: &mut T) -> Result<Report> {
        let mut report: Option<Report> = None;

        for case in &self.cases {
            let engine = (self.factory)();
            let run_report = report.get_or_insert_with(|| Report::new(engine.name()));

            match case.run(&engine, timer) {
                Ok(case_report) => run_report.add_case(case_report),
                Err(err) => {
                    error!(case = case.name(), error = %err, "timer failed, aborting run");
                    return Err(err.into());
                }
            }
        }

        let report = match report {
            Some(report) => report,
            None => Report::new((self.factory)().name()),
        };

        info!(
            cases = report.case_count(),
            failed = report.cases.iter().filter(|c| c.is_failed()).count(),
            "benchmark run complete"
        );

        Ok(report)
    }
}
