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

//! Shared test tooling for tmplbench.
//!
//! Deterministic stand-ins for the two things the harness treats as external:
//! the clock and the template engine.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use tmplbench_test::{CallLog, ManualClock, StubEngine};
//!
//! let clock = ManualClock::new();
//! let log = CallLog::new();
//!
//! // Every render advances the clock by exactly 5 microseconds.
//! let engine = StubEngine::new()
//!     .with_clock(clock.clone())
//!     .with_log(log.clone())
//!     .render_cost(Duration::from_micros(5));
//! let timer = clock.timer().with_log(log.clone());
//! ```
//!
//! - [`ManualClock`] / [`ClockTimer`]: a clock that only moves when told to
//! - [`ScriptedTimer`]: returns a fixed list of durations, then fails
//! - [`StubEngine`]: counts calls, simulates cost, injects failures
//! - [`CallLog`]: ordered record of engine calls and timer events

pub mod clock;
pub mod engine;
pub mod log;

pub use clock::{ClockTimer, ManualClock, ScriptedTimer};
pub use engine::{StubEngine, StubTemplate};
pub use log::{CallLog, Event};
