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

//! Ordered record of engine calls and timer events.

use std::cell::RefCell;
use std::rc::Rc;

/// Something observable that happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `compile` produced the template with this id.
    Compile { template: usize },
    /// `render` was called on the template with this id.
    Render { template: usize },
    /// A timed window opened.
    TimerStart,
    /// A timed window closed and produced a sample.
    SampleRecorded,
}

impl Event {
    /// Returns whether this is an engine call.
    pub fn is_engine_call(&self) -> bool {
        matches!(self, Event::Compile { .. } | Event::Render { .. })
    }
}

/// Shared, cloneable event log. Clones append to the same log.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    events: Rc<RefCell<Vec<Event>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all events in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Ids of all compiled templates, in creation order.
    pub fn compiled_templates(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Compile { template } => Some(*template),
                _ => None,
            })
            .collect()
    }

    /// Ids of the templates each render used, in call order.
    pub fn rendered_templates(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Render { template } => Some(*template),
                _ => None,
            })
            .collect()
    }

    /// Number of engine calls logged before the first sample, or `None` if no
    /// sample was recorded.
    pub fn engine_calls_before_first_sample(&self) -> Option<usize> {
        let events = self.events.borrow();
        let first = events.iter().position(|e| *e == Event::SampleRecorded)?;
        Some(events[..first].iter().filter(|e| e.is_engine_call()).count())
    }

    /// Engine calls that happened inside timed windows.
    pub fn timed_calls(&self) -> Vec<Event> {
        let mut inside = false;
        let mut calls = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                Event::TimerStart => inside = true,
                Event::SampleRecorded => inside = false,
                e if inside => calls.push(*e),
                _ => {}
            }
        }
        calls
    }
}
