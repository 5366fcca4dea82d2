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

//! Console reporter for benchmark results.
//!
//! Formats a [`Report`] as the fixed-layout text report: a title banner, one
//! section per case, and a summary of each case's primary metric.

use crate::core::Metric;
use crate::reporters::types::{CaseReport, MetricOutcome, Report};
use std::io::{self, Write};

const WIDTH: usize = 60;

/// Writes the full report to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out)?;

    for (i, case) in report.cases.iter().enumerate() {
        write_case(out, i + 1, case)?;
    }

    write_summary(out, report)
}

/// Formats the full report as a string.
pub fn format_report(report: &Report) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, report).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("report output is valid UTF-8")
}

/// Prints the full report to stdout.
pub fn print_report(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report)?;
    out.flush()
}

fn write_case<W: Write>(out: &mut W, index: usize, case: &CaseReport) -> io::Result<()> {
    writeln!(out, "{}. {}", index, case.title)?;
    writeln!(out, "{}", "-".repeat(WIDTH))?;

    for metric in &case.metrics {
        writeln!(out, "   {}:", metric.label)?;
        match &metric.outcome {
            MetricOutcome::Reported(stats) => {
                writeln!(out, "     Average:  {}", micros(stats.mean))?;
                writeln!(out, "     Median:   {}", micros(stats.median))?;
            }
            MetricOutcome::Failed { error } => {
                writeln!(out, "     FAILED:   {}", error)?;
            }
            MetricOutcome::Skipped => {
                writeln!(out, "     Skipped:  earlier metric failed")?;
            }
        }
    }

    writeln!(out)
}

fn write_summary<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "Summary")?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;

    let primary: Vec<(String, String)> = report
        .cases
        .iter()
        .map(|case| summary_line(case, case.primary))
        .collect();
    write_aligned(out, &primary)?;

    // Non-primary metrics that were actually measured, e.g. simple-case compile latency.
    let secondary: Vec<(String, String)> = report
        .cases
        .iter()
        .flat_map(|case| {
            case.metrics
                .iter()
                .filter(|m| m.metric != case.primary && m.stats().is_some())
                .map(move |m| summary_line(case, m.metric))
        })
        .collect();
    write_aligned(out, &secondary)
}

fn summary_line(case: &CaseReport, metric: Metric) -> (String, String) {
    let label = format!("{} {}:", case.summary_label, activity(metric));
    let value = match case.stats(metric) {
        Some(stats) => micros(stats.mean),
        None => "FAILED".to_string(),
    };
    (label, value)
}

fn write_aligned<W: Write>(out: &mut W, lines: &[(String, String)]) -> io::Result<()> {
    let width = lines
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    for (label, value) in lines {
        writeln!(out, "{:<width$}{}", label, value, width = width)?;
    }
    Ok(())
}

fn activity(metric: Metric) -> &'static str {
    match metric {
        Metric::Compile => "compilation",
        Metric::Render => "rendering",
    }
}

fn micros(value: f64) -> String {
    format!("{:.2} μs", value)
}
