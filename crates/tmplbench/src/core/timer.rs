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

//! Timing of single operations.
//!
//! The harness only ever talks to the [`Timer`] trait. Production runs use
//! [`MonotonicTimer`]; tests inject a clock that returns scripted durations.

use crate::core::measurement::Sample;
use crate::error::TimerError;
use std::time::Instant;

/// Brackets exactly one operation with `start` and `stop`.
///
/// Implementations must not allocate or perform I/O in either call.
pub trait Timer {
    /// Marks the beginning of the timed window.
    fn start(&mut self) -> Result<(), TimerError>;

    /// Ends the timed window and returns its length.
    fn stop(&mut self) -> Result<Sample, TimerError>;
}

impl<T: Timer + ?Sized> Timer for &mut T {
    #[inline]
    fn start(&mut self) -> Result<(), TimerError> {
        (**self).start()
    }

    #[inline]
    fn stop(&mut self) -> Result<Sample, TimerError> {
        (**self).stop()
    }
}

/// Timer backed by [`Instant`], which is monotonic and unaffected by
/// wall-clock adjustments.
#[derive(Debug, Default)]
pub struct MonotonicTimer {
    started: Option<Instant>,
}

impl MonotonicTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for MonotonicTimer {
    #[inline]
    fn start(&mut self) -> Result<(), TimerError> {
        self.started = Some(Instant::now());
        Ok(())
    }

    #[inline]
    fn stop(&mut self) -> Result<Sample, TimerError> {
        let started = self.started.take().ok_or(TimerError::NotStarted)?;
        Ok(Sample::from_duration(started.elapsed()))
    }
}
