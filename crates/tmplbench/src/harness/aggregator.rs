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

//! Sample aggregation and statistics computation.
//!
//! All functions are order-independent: any permutation of the same samples
//! yields bit-identical results, because sums are taken over the sorted values.
//! An empty input is a bug in the caller and panics.

use crate::core::{FrozenSampleSet, Sample};
use serde::{Deserialize, Serialize};

/// Statistical summary of one sample set, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Number of samples.
    pub count: usize,
}

impl Statistics {
    /// Computes statistics for a frozen sample set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn from_samples(set: &FrozenSampleSet) -> Self {
        let sorted = sorted_micros(set.samples());

        Self {
            mean: sorted_mean(&sorted),
            median: sorted_median(&sorted),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            count: sorted.len(),
        }
    }
}

/// Arithmetic mean of `samples`.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn mean(samples: &[Sample]) -> f64 {
    sorted_mean(&sorted_micros(samples))
}

/// Median of `samples`: the middle value for odd lengths, the average of the
/// two central values for even lengths.
///
/// # Panics
///
/// Panics if `samples` is empty.
pub fn median(samples: &[Sample]) -> f64 {
    sorted_median(&sorted_micros(samples))
}

fn sorted_micros(samples: &[Sample]) -> Vec<f64> {
    assert!(!samples.is_empty(), "cannot aggregate an empty sample set");

    let mut values: Vec<f64> = samples.iter().map(|s| s.as_micros()).collect();
    values.sort_by(f64::total_cmp);
    values
}

// Offsets from the minimum keep identical samples exact: their mean is the
// minimum itself, with no accumulated rounding.
fn sorted_mean(sorted: &[f64]) -> f64 {
    let base = sorted[0];
    base + sorted.iter().map(|v| v - base).sum::<f64>() / sorted.len() as f64
}

fn sorted_median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
