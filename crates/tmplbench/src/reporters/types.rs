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

//! Report types and structures.
//!
//! A [`Report`] is built once by the runner and only read afterwards. Cases
//! appear in the order they ran.

use crate::core::Metric;
use crate::harness::aggregator::Statistics;
use crate::harness::case::{CaseState, MetricPlan};
use serde::{Deserialize, Serialize};

/// What happened to one planned metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MetricOutcome {
    /// Measured and aggregated.
    Reported(Statistics),
    /// Compile or render failed; no statistics exist.
    Failed {
        /// Error message
        error: String,
    },
    /// Not run because an earlier metric of the case failed.
    Skipped,
}

/// Result for one metric of a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    pub metric: Metric,
    /// Section heading, e.g. "Rendering (5 items)".
    pub label: String,
    /// Measured iterations that were planned.
    pub iterations: u64,
    pub outcome: MetricOutcome,
}

impl MetricReport {
    pub fn new(plan: &MetricPlan, outcome: MetricOutcome) -> Self {
        Self {
            metric: plan.metric,
            label: plan.label.clone(),
            iterations: plan.measured_iterations,
            outcome,
        }
    }

    /// Statistics, if the metric was reported.
    pub fn stats(&self) -> Option<&Statistics> {
        match &self.outcome {
            MetricOutcome::Reported(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Results for one benchmark case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Case name, the report key.
    pub name: String,
    /// Section heading.
    pub title: String,
    /// Summary prefix, e.g. "Loop template".
    pub summary_label: String,
    /// Metric shown in the summary.
    pub primary: Metric,
    /// `Reported` or `Failed`.
    pub state: CaseState,
    /// Planned metrics in run order.
    pub metrics: Vec<MetricReport>,
}

impl CaseReport {
    /// Builds the report of a finished case from its metric results.
    ///
    /// The state is `Failed` if any metric failed, `Reported` otherwise.
    pub fn new(
        name: &str,
        title: &str,
        summary_label: &str,
        primary: Metric,
        metrics: Vec<MetricReport>,
    ) -> Self {
        let failed = metrics
            .iter()
            .any(|m| matches!(m.outcome, MetricOutcome::Failed { .. }));
        Self {
            name: name.to_string(),
            title: title.to_string(),
            summary_label: summary_label.to_string(),
            primary,
            state: if failed {
                CaseState::Failed
            } else {
                CaseState::Reported
            },
            metrics,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricReport> {
        self.metrics.iter().find(|m| m.metric == metric)
    }

    /// Statistics for `metric`, if it was reported.
    pub fn stats(&self, metric: Metric) -> Option<&Statistics> {
        self.metric(metric).and_then(MetricReport::stats)
    }

    pub fn is_failed(&self) -> bool {
        self.state == CaseState::Failed
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Banner title.
    pub title: String,
    /// Name of the engine under test.
    pub engine: String,
    /// Report timestamp.
    pub timestamp: String,
    /// Cases in execution order.
    pub cases: Vec<CaseReport>,
}

impl Report {
    /// Creates an empty report for `engine`.
    pub fn new(engine: impl Into<String>) -> Self {
        let engine = engine.into();
        Self {
            title: format!("{engine} Engine Performance Benchmark"),
            engine,
            timestamp: chrono::Utc::now().to_rfc3339(),
            cases: Vec::new(),
        }
    }

    pub fn add_case(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }

    /// Looks up `case` → `metric` statistics.
    pub fn get(&self, case: &str, metric: Metric) -> Option<&Statistics> {
        self.case(case).and_then(|c| c.stats(metric))
    }

    /// Returns whether any case failed.
    pub fn has_failures(&self) -> bool {
        self.cases.iter().any(CaseReport::is_failed)
    }

    /// Process exit status for this report: 0 when every case was
    /// reported, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        u8::from(self.has_failures())
    }

    /// Returns the number of cases.
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}
