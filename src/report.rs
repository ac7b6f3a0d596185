//! Console report: summary block, grade distribution, pass/fail lists and
//! the per-student table.

use std::io::Write;

use anyhow::Result;

use crate::output::format_score;
use crate::stats::AnalysisSummary;
use crate::store::RecordStore;

const RULE_WIDTH: usize = 40;

/// Writes the full report for `store`. An empty store only prints a notice.
pub fn print_report<W: Write>(
    out: &mut W,
    store: &RecordStore,
    summary: &AnalysisSummary,
) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No data to analyze.")?;
        return Ok(());
    }

    print_summary(out, summary)?;
    print_table(out, store, summary)?;
    Ok(())
}

/// Writes counts, averages, extremes, the grade distribution and pass/fail lists.
pub fn print_summary<W: Write>(out: &mut W, summary: &AnalysisSummary) -> Result<()> {
    writeln!(out, "\n--- Summary ---")?;
    writeln!(out, "Students: {}", summary.students)?;
    writeln!(out, "Average: {:.2}", summary.average)?;
    writeln!(out, "Median: {:.2}", summary.median)?;
    writeln!(
        out,
        "Max: {} -> {}",
        summary.max.name,
        format_score(summary.max.score)
    )?;
    writeln!(
        out,
        "Min: {} -> {}",
        summary.min.name,
        format_score(summary.min.score)
    )?;

    writeln!(out, "\nGrade Distribution:")?;
    for (grade, count) in summary.distribution.iter() {
        writeln!(out, " {}: {}", grade, count)?;
    }

    writeln!(
        out,
        "\nPassed ({}): {}",
        summary.passed.len(),
        join_or_none(&summary.passed)
    )?;
    writeln!(
        out,
        "Failed ({}): {}",
        summary.failed.len(),
        join_or_none(&summary.failed)
    )?;
    Ok(())
}

/// Writes the fixed-width name/marks/grade table in store order.
pub fn print_table<W: Write>(
    out: &mut W,
    store: &RecordStore,
    summary: &AnalysisSummary,
) -> Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{:<20}{:<10}{}", "Name", "Marks", "Grade")?;
    writeln!(out, "{}", rule)?;
    for record in store {
        let grade = summary
            .grades
            .get(&record.name)
            .map(|g| g.as_str())
            .unwrap_or_default();
        writeln!(
            out,
            "{:<20}{:<10}{}",
            record.name,
            format_score(record.score),
            grade
        )?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}
