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

//! Deterministic clocks.

use crate::log::{CallLog, Event};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;
use tmplbench::{Sample, Timer, TimerError};

/// A clock that only moves when [`advance`](ManualClock::advance) is called.
///
/// Clones share the same time, so an engine stub can advance the clock a
/// timer reads from.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ns: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.now_ns.set(self.now_ns.get() + by.as_nanos() as u64);
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        Duration::from_nanos(self.now_ns.get())
    }

    /// Creates a timer reading this clock.
    pub fn timer(&self) -> ClockTimer {
        ClockTimer {
            clock: self.clone(),
            started: None,
            log: None,
        }
    }
}

/// [`Timer`] over a [`ManualClock`].
#[derive(Debug)]
pub struct ClockTimer {
    clock: ManualClock,
    started: Option<Duration>,
    log: Option<CallLog>,
}

impl ClockTimer {
    /// Records timer events into `log`.
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    fn record(&self, event: Event) {
        if let Some(log) = &self.log {
            log.record(event);
        }
    }
}

impl Timer for ClockTimer {
    fn start(&mut self) -> Result<(), TimerError> {
        self.started = Some(self.clock.now());
        self.record(Event::TimerStart);
        Ok(())
    }

    fn stop(&mut self) -> Result<Sample, TimerError> {
        let started = self.started.take().ok_or(TimerError::NotStarted)?;
        self.record(Event::SampleRecorded);
        Ok(Sample::from_duration(self.clock.now() - started))
    }
}

/// Returns scripted durations, one per `stop`, and fails once they run out.
#[derive(Debug, Clone)]
pub struct ScriptedTimer {
    durations: VecDeque<f64>,
    running: bool,
}

impl ScriptedTimer {
    /// Creates a timer that yields `micros` in order.
    pub fn new(micros: impl IntoIterator<Item = f64>) -> Self {
        Self {
            durations: micros.into_iter().collect(),
            running: false,
        }
    }

    /// Durations not yet returned.
    pub fn remaining(&self) -> usize {
        self.durations.len()
    }
}

impl Timer for ScriptedTimer {
    fn start(&mut self) -> Result<(), TimerError> {
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<Sample, TimerError> {
        if !std::mem::take(&mut self.running) {
            return Err(TimerError::NotStarted);
        }
        self.durations
            .pop_front()
            .map(Sample::from_micros)
            .ok_or_else(|| TimerError::ClockUnavailable("scripted clock exhausted".to_string()))
    }
}
