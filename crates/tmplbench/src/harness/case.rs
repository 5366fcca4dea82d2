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

//! Benchmark cases and the warmup/measurement protocol.
//!
//! Every metric of a case runs in two strictly ordered phases:
//!
//! 1. **Warmup**: the operation under test runs `warmup_iterations` times and
//!    nothing is timed.
//! 2. **Measurement**: the operation runs exactly `measured_iterations` times,
//!    each call timed on its own and appended to a [`SampleSet`].
//!
//! Compile latency calls `compile` afresh for every iteration. Render latency
//! compiles once, outside both phases, and renders that one template every
//! iteration.

use crate::core::{FrozenSampleSet, Metric, SampleSet, Timer};
use crate::engine::{CompiledTemplate, Context, TemplateEngine};
use crate::error::{BenchError, MetricFailure, Result, TimerError};
use crate::harness::aggregator::Statistics;
use crate::reporters::types::{CaseReport, MetricOutcome, MetricReport};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use tracing::{debug, info, warn};

/// Lifecycle of a metric run.
///
/// `Warmup -> Measuring -> Reported`, or `Failed` from either of the first
/// two. Transitions never go backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseState {
    Warmup,
    Measuring,
    Reported,
    Failed,
}

impl CaseState {
    /// Moves to `next`.
    ///
    /// # Panics
    ///
    /// Panics on a transition the lifecycle does not allow.
    fn advance(&mut self, next: CaseState) {
        let allowed = matches!(
            (*self, next),
            (CaseState::Warmup, CaseState::Measuring)
                | (CaseState::Measuring, CaseState::Reported)
                | (CaseState::Warmup, CaseState::Failed)
                | (CaseState::Measuring, CaseState::Failed)
        );
        assert!(allowed, "illegal case transition {:?} -> {:?}", self, next);
        *self = next;
    }

    /// Returns whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaseState::Reported | CaseState::Failed)
    }
}

/// Where a case gets its render context from.
#[derive(Debug, Clone)]
pub enum ContextSource {
    /// A fixed value.
    Static(Context),
    /// Built on demand, once per metric.
    Generated(fn() -> Context),
}

impl ContextSource {
    /// Produces the context value.
    pub fn produce(&self) -> Context {
        match self {
            ContextSource::Static(value) => value.clone(),
            ContextSource::Generated(generate) => generate(),
        }
    }
}

/// One metric measured by a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricPlan {
    /// Operation under test.
    pub metric: Metric,
    /// Number of timed calls. Always at least 1.
    pub measured_iterations: u64,
    /// Section heading in the console report.
    pub label: String,
}

/// A single benchmark scenario. Immutable once built.
#[derive(Debug, Clone)]
pub struct BenchmarkCase {
    name: String,
    title: String,
    summary_label: String,
    source: &'static str,
    warmup_iterations: u64,
    plans: Vec<MetricPlan>,
    primary: Metric,
    context: ContextSource,
}

impl BenchmarkCase {
    /// Starts building a case named `name` for the template `source`.
    pub fn builder(name: impl Into<String>, source: &'static str) -> CaseBuilder {
        let name = name.into();
        CaseBuilder {
            title: name.clone(),
            summary_label: name.clone(),
            name,
            source,
            warmup_iterations: 0,
            plans: Vec::new(),
            primary: None,
            context: ContextSource::Static(Context::Null),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn warmup_iterations(&self) -> u64 {
        self.warmup_iterations
    }

    pub fn plans(&self) -> &[MetricPlan] {
        &self.plans
    }

    /// The metric shown in the end-of-run summary.
    pub fn primary(&self) -> Metric {
        self.primary
    }

    /// Runs every planned metric against `engine`.
    ///
    /// A compile or render failure ends the case: the failing metric is
    /// reported as failed, later metrics as skipped, and earlier metrics keep
    /// their statistics. A timer failure is returned as an error instead,
    /// because no measurement taken with that clock can be trusted.
    pub fn run<E, T>(&self, engine: &E, timer: &mut T) -> std::result::Result<CaseReport, TimerError>
    where
        E: TemplateEngine,
        T: Timer + ?Sized,
    {
        info!(case = %self.name, engine = engine.name(), "running benchmark case");

        let mut metrics = Vec::with_capacity(self.plans.len());
        let mut plans = self.plans.iter();

        for plan in plans.by_ref() {
            let mut state = CaseState::Warmup;
            match self.run_metric(plan, engine, timer, &mut state) {
                Ok(samples) => {
                    let stats = Statistics::from_samples(&samples);
                    state.advance(CaseState::Reported);
                    debug!(
                        case = %self.name,
                        metric = %plan.metric,
                        mean_us = stats.mean,
                        median_us = stats.median,
                        "metric reported"
                    );
                    metrics.push(MetricReport::new(plan, MetricOutcome::Reported(stats)));
                }
                Err(MetricFailure::Case(err)) => {
                    let phase = state;
                    state.advance(CaseState::Failed);
                    warn!(
                        case = %self.name,
                        metric = %plan.metric,
                        phase = ?phase,
                        error = %err,
                        "benchmark case failed"
                    );
                    metrics.push(MetricReport::new(
                        plan,
                        MetricOutcome::Failed {
                            error: err.to_string(),
                        },
                    ));
                    break;
                }
                Err(MetricFailure::Timer(err)) => return Err(err),
            }
        }

        metrics.extend(plans.map(|plan| MetricReport::new(plan, MetricOutcome::Skipped)));

        Ok(CaseReport::new(
            &self.name,
            &self.title,
            &self.summary_label,
            self.primary,
            metrics,
        ))
    }

    /// Runs warmup then measurement for one metric.
    fn run_metric<E, T>(
        &self,
        plan: &MetricPlan,
        engine: &E,
        timer: &mut T,
        state: &mut CaseState,
    ) -> std::result::Result<FrozenSampleSet, MetricFailure>
    where
        E: TemplateEngine,
        T: Timer + ?Sized,
    {
        let mut samples = SampleSet::for_iterations(plan.metric, plan.measured_iterations);

        match plan.metric {
            Metric::Compile => {
                for _ in 0..self.warmup_iterations {
                    black_box(engine.compile(self.source)?);
                }
                state.advance(CaseState::Measuring);

                for _ in 0..plan.measured_iterations {
                    timer.start()?;
                    let compiled = engine.compile(self.source);
                    let sample = timer.stop()?;
                    black_box(compiled?);
                    samples.push(sample);
                }
            }
            Metric::Render => {
                let context = self.context.produce();
                let compiled = engine.compile(self.source)?;

                for _ in 0..self.warmup_iterations {
                    black_box(compiled.render(&context)?);
                }
                state.advance(CaseState::Measuring);

                for _ in 0..plan.measured_iterations {
                    timer.start()?;
                    let output = compiled.render(&context);
                    let sample = timer.stop()?;
                    black_box(output?);
                    samples.push(sample);
                }
            }
        }

        Ok(samples.freeze())
    }
}

/// Builder for [`BenchmarkCase`].
#[derive(Debug, Clone)]
pub struct CaseBuilder {
    name: String,
    title: String,
    summary_label: String,
    source: &'static str,
    warmup_iterations: u64,
    plans: Vec<MetricPlan>,
    primary: Option<Metric>,
    context: ContextSource,
}

impl CaseBuilder {
    /// Sets the section heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the summary prefix, e.g. `"Loop template"`.
    pub fn summary_label(mut self, label: impl Into<String>) -> Self {
        self.summary_label = label.into();
        self
    }

    /// Sets the warmup iterations run before each metric.
    pub fn warmup(mut self, iterations: u64) -> Self {
        self.warmup_iterations = iterations;
        self
    }

    /// Uses a fixed context.
    pub fn context(mut self, context: Context) -> Self {
        self.context = ContextSource::Static(context);
        self
    }

    /// Builds the context on demand.
    pub fn generated_context(mut self, generate: fn() -> Context) -> Self {
        self.context = ContextSource::Generated(generate);
        self
    }

    /// Adds a metric. Metrics run in the order they are added.
    pub fn measure(mut self, metric: Metric, iterations: u64, label: impl Into<String>) -> Self {
        self.plans.push(MetricPlan {
            metric,
            measured_iterations: iterations,
            label: label.into(),
        });
        self
    }

    /// Overrides the summary metric. Defaults to render when measured,
    /// otherwise the first metric.
    pub fn primary(mut self, metric: Metric) -> Self {
        self.primary = Some(metric);
        self
    }

    /// Validates and builds the case.
    pub fn build(self) -> Result<BenchmarkCase> {
        if self.plans.is_empty() {
            return Err(invalid(&self.name, "metrics", "at least one metric is required"));
        }
        if let Some(plan) = self.plans.iter().find(|p| p.measured_iterations == 0) {
            return Err(invalid(
                &self.name,
                &format!("{}_iterations", plan.metric),
                "must be at least 1",
            ));
        }

        let primary = match self.primary {
            Some(metric) if self.plans.iter().any(|p| p.metric == metric) => metric,
            Some(metric) => {
                return Err(invalid(
                    &self.name,
                    "primary",
                    &format!("metric '{metric}' is not measured"),
                ))
            }
            None if self.plans.iter().any(|p| p.metric == Metric::Render) => Metric::Render,
            None => self.plans[0].metric,
        };

        Ok(BenchmarkCase {
            name: self.name,
            title: self.title,
            summary_label: self.summary_label,
            source: self.source,
            warmup_iterations: self.warmup_iterations,
            plans: self.plans,
            primary,
            context: self.context,
        })
    }
}

fn invalid(case: &str, parameter: &str, reason: &str) -> BenchError {
    BenchError::InvalidConfig {
        parameter: format!("{case}.{parameter}"),
        reason: reason.to_string(),
    }
}
