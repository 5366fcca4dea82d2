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

//! Error types for benchmark operations.
//!
//! Errors fall into two scopes:
//!
//! - **Case-scoped**: [`CompileError`] and [`RenderError`], wrapped in
//!   [`CaseError`]. They fail the metric they occurred in and the driver moves
//!   on to the next case.
//! - **Run-scoped**: [`TimerError`]. Once the clock cannot be trusted no
//!   further measurement is meaningful, so the whole run aborts with
//!   [`BenchError::Timer`].

use thiserror::Error;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// The engine rejected a template source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("compile error: {message}")]
pub struct CompileError {
    /// Engine-provided description of the failure
    pub message: String,
}

impl CompileError {
    /// Creates a compile error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A compiled template could not be rendered against the given context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("render error: {message}")]
pub struct RenderError {
    /// Engine-provided description of the failure
    pub message: String,
}

impl RenderError {
    /// Creates a render error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The clock backing a [`Timer`](crate::core::Timer) is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// `stop` was called without a matching `start`.
    #[error("timer stopped before it was started")]
    NotStarted,

    /// The clock source could not produce a reading.
    #[error("clock source unavailable: {0}")]
    ClockUnavailable(String),
}

/// Errors confined to a single benchmark case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Template compilation failed.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Top-level errors that stop a benchmark run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Timing failed; nothing measured afterwards could be trusted.
    #[error("benchmark run aborted: {0}")]
    Timer(#[from] TimerError),

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Failure raised while running one metric of a case.
///
/// Keeps the two scopes apart so the runner can decide whether to continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum MetricFailure {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl From<CompileError> for MetricFailure {
    fn from(err: CompileError) -> Self {
        MetricFailure::Case(err.into())
    }
}

impl From<RenderError> for MetricFailure {
    fn from(err: RenderError) -> Self {
        MetricFailure::Case(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompileError::new("unexpected end of input");
        assert_eq!(err.to_string(), "compile error: unexpected end of input");

        let err = CaseError::from(RenderError::new("undefined value"));
        assert_eq!(err.to_string(), "render error: undefined value");

        let err = BenchError::from(TimerError::NotStarted);
        assert!(err.to_string().contains("aborted"));
        assert!(err.to_string().contains("before it was started"));

        let err = BenchError::InvalidConfig {
            parameter: "render_iterations".to_string(),
            reason: "must be at least 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("render_iterations"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_metric_failure_scopes() {
        let failure = MetricFailure::from(CompileError::new("bad"));
        assert!(matches!(failure, MetricFailure::Case(CaseError::Compile(_))));

        let failure = MetricFailure::from(TimerError::ClockUnavailable("gone".into()));
        assert!(matches!(failure, MetricFailure::Timer(_)));
    }
}
