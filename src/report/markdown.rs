//! Markdown rendering of repository reports.

use std::fmt::Write;

use super::RepoReport;

pub const TABLE_HEADER: &str = "| Repository | Description | Stars | Last Commit |";
const TABLE_SEPARATOR: &str = "|------------|-------------|-------|-------------|";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders a titled document with one table row per report, in the given order.
pub fn render(title: &str, reports: &[RepoReport]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}\n", title);
    let _ = writeln!(out, "{}", TABLE_HEADER);
    let _ = writeln!(out, "{}", TABLE_SEPARATOR);

    for report in reports {
        let last_commit = report
            .pushed_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "| [{}]({}) | {} | {} | {} |",
            escape_cell(&report.name),
            report.html_url,
            escape_cell(report.description.as_deref().unwrap_or("")),
            report.stars,
            last_commit,
        );
    }

    out
}

/// Counts the data rows of the table in a rendered document.
pub fn count_rows(document: &str) -> usize {
    document
        .lines()
        .filter(|line| line.trim_start().starts_with('|'))
        .skip(2)
        .count()
}

/// Keeps a value inside one cell of one row.
fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}
