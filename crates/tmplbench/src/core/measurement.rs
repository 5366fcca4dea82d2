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

//! Measurement primitives.
//!
//! A [`Sample`] is the duration of exactly one engine call. Samples for one
//! metric are appended to a [`SampleSet`] while measuring and then frozen into
//! a [`FrozenSampleSet`], the only form the aggregator accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The engine operation a sample set measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Fresh `compile(source)` per sample.
    Compile,
    /// `render(context)` on one reused compiled template.
    Render,
}

impl Metric {
    /// Returns the metric name used as a report key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Compile => "compile",
            Metric::Render => "render",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed operation, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Sample(f64);

impl Sample {
    /// Creates a sample from a microsecond value.
    ///
    /// # Panics
    ///
    /// Panics if `micros` is negative or not finite.
    pub fn from_micros(micros: f64) -> Self {
        assert!(
            micros.is_finite() && micros >= 0.0,
            "sample must be a non-negative finite duration, got {micros}"
        );
        Self(micros)
    }

    /// Converts an elapsed duration, keeping nanosecond resolution.
    #[inline]
    pub fn from_duration(duration: Duration) -> Self {
        Self(duration.as_nanos() as f64 / 1_000.0)
    }

    /// Returns the duration in microseconds.
    #[inline]
    pub fn as_micros(self) -> f64 {
        self.0
    }
}

/// Upper bound on the samples reserved up front by [`SampleSet::for_iterations`].
pub const MAX_RESERVED_SAMPLES: usize = 1 << 20;

/// Samples for one metric, in execution order, still being recorded.
#[derive(Debug, Clone)]
pub struct SampleSet {
    metric: Metric,
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Creates an empty set with room for `capacity` samples.
    ///
    /// Reserving up front keeps `push` from reallocating between timed calls.
    pub fn with_capacity(metric: Metric, capacity: usize) -> Self {
        Self {
            metric,
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty set sized for `iterations` measured calls.
    ///
    /// The reservation is capped at [`MAX_RESERVED_SAMPLES`]; larger runs grow
    /// the buffer as they go.
    pub fn for_iterations(metric: Metric, iterations: u64) -> Self {
        let capacity = usize::try_from(iterations)
            .unwrap_or(usize::MAX)
            .min(MAX_RESERVED_SAMPLES);
        Self::with_capacity(metric, capacity)
    }

    /// Appends a sample.
    #[inline]
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Ends recording. The returned set cannot be appended to.
    pub fn freeze(self) -> FrozenSampleSet {
        FrozenSampleSet {
            metric: self.metric,
            samples: self.samples.into_boxed_slice(),
        }
    }
}

/// A finished, read-only sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenSampleSet {
    metric: Metric,
    samples: Box<[Sample]>,
}

impl FrozenSampleSet {
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Samples in the order they were recorded.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
