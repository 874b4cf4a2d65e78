//! # Report
//!
//! Plain text tables of analysis results.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
use std::fmt;

use itertools::Itertools;

use crate::analysis::{Analysis, SeriesRecord, analyze};
use crate::errors::SeriesResult;

/// Sample sizes shown by [`default_report`].
pub const REPORT_SAMPLE_SIZES: [usize; 4] = [10, 100, 1000, 10_000];

const HEADER: &str = "N\tS1\t\tS2\t\tS3\t\tErr1\t\tErr2";

/// Format a single record as a tab separated row.
///
/// Sums are printed with 8 decimals, errors in scientific notation with 2.
#[must_use]
pub fn format_row(record: &SeriesRecord) -> String {
    format!(
        "{}\t{:.8}\t{:.8}\t{:.8}\t{:.2e}\t{:.2e}",
        record.n, record.s1, record.s2, record.s3, record.err1, record.err2
    )
}

/// Format records as a text table, a header and separator followed by one row per
/// record.
///
/// ```
///     use series_core::prelude::{analyze, format_table};
///     let table = format_table(analyze(&[10, 100]).unwrap().records());
///     assert_eq!(table.lines().count(), 4);
///     assert!(table.lines().nth(2).unwrap().starts_with("10\t0.28"));
/// ```
#[must_use]
pub fn format_table(records: &[SeriesRecord]) -> String {
    let separator = "-".repeat(80);
    [HEADER.to_string(), separator]
        .into_iter()
        .chain(records.iter().map(format_row))
        .join("\n")
}

/// Table for the sample sizes in [`REPORT_SAMPLE_SIZES`].
///
/// # Errors
/// Propagates analysis errors, none are expected for these sizes.
pub fn default_report() -> SeriesResult<String> {
    Ok(format_table(analyze(&REPORT_SAMPLE_SIZES)?.records()))
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_table(self.records()))
    }
}
