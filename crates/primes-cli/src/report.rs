//! Plain-text rendering of an analysis result.

use std::io::{self, Write};

use primes_analysis::distribution::{self, CumulativePoint, DistributionBucket};
use primes_core::config::ReportConfig;
use primes_core::types::format::group_thousands;
use primes_core::types::AnalysisResult;

use crate::Section;

/// Widest bar drawn in a text chart.
const BAR_WIDTH: usize = 40;

/// Header, summary, then either one section or all of them.
pub fn write_human<W: Write>(
    out: &mut W,
    result: &AnalysisResult,
    config: &ReportConfig,
    section: Option<Section>,
) -> io::Result<()> {
    writeln!(
        out,
        "Generated {} primes up to {}",
        group_thousands(result.prime_count),
        group_thousands(result.bound)
    )?;
    writeln!(out)?;
    write_summary(out, result)?;

    let sections = match section {
        Some(s) => vec![s],
        None => vec![Section::Distribution, Section::Gaps, Section::Twins],
    };
    for s in sections {
        writeln!(out)?;
        match s {
            Section::Distribution => {
                write_distribution(out, &distribution::for_result(result, config))?;
                write_cumulative(out, &distribution::cumulative_for_result(result, config))?;
            }
            Section::Gaps => write_gaps(out, result, config.effective_gap_chart_limit())?,
            Section::Twins => write_twins(out, result, config.effective_twin_display_limit())?,
        }
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    let mean_gap = if result.gap_count() > 0 {
        format!("{:.2}", result.gap_stats.average)
    } else {
        "N/A".to_string()
    };

    writeln!(out, "Summary")?;
    writeln!(out, "  Total primes found  {}", group_thousands(result.prime_count))?;
    writeln!(out, "  Prime density       {:.2}%", result.density_percent())?;
    writeln!(out, "  Largest gap         {}", group_thousands(result.gap_stats.max))?;
    writeln!(out, "  Twin prime pairs    {}", group_thousands(result.twin_primes.len()))?;
    writeln!(out, "  Mean gap            {mean_gap}")
}

pub fn write_distribution<W: Write>(out: &mut W, buckets: &[DistributionBucket]) -> io::Result<()> {
    writeln!(out, "Prime distribution")?;
    if buckets.is_empty() {
        return writeln!(out, "  No primes in this range.");
    }

    let peak = buckets.iter().map(|b| b.count as u64).max().unwrap_or(0);
    let label_width = buckets.iter().map(|b| b.label().len()).max().unwrap_or(0);
    for bucket in buckets {
        writeln!(
            out,
            "  {:>width$} | {} {}",
            bucket.label(),
            bar(bucket.count as u64, peak),
            bucket.count,
            width = label_width
        )?;
    }
    Ok(())
}

/// Cumulative prime count samples. Prints nothing for an empty series.
pub fn write_cumulative<W: Write>(out: &mut W, points: &[CumulativePoint]) -> io::Result<()> {
    let Some(last) = points.last() else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "Cumulative prime count")?;
    let peak = last.count as u64;
    let n_width = group_thousands(last.n).len();
    for point in points {
        writeln!(
            out,
            "  n <= {:>width$} | {} {}",
            group_thousands(point.n),
            bar(point.count as u64, peak),
            group_thousands(point.count),
            width = n_width
        )?;
    }
    Ok(())
}

pub fn write_gaps<W: Write>(out: &mut W, result: &AnalysisResult, limit: usize) -> io::Result<()> {
    writeln!(out, "Prime gap frequencies")?;
    let series = result.gaps.sorted_series(limit);
    if series.is_empty() {
        return writeln!(out, "  No gaps (fewer than two primes).");
    }

    let peak = series.iter().map(|&(_, count)| count).max().unwrap_or(0);
    let gap_width = series.iter().map(|&(gap, _)| gap.to_string().len()).max().unwrap_or(0);
    for (gap, count) in &series {
        writeln!(
            out,
            "  gap {:>width$} | {} {}",
            gap,
            bar(*count, peak),
            group_thousands(count),
            width = gap_width
        )?;
    }
    if result.gaps.len() > series.len() {
        writeln!(out, "  ... {} larger gap sizes not shown", result.gaps.len() - series.len())?;
    }
    Ok(())
}

pub fn write_twins<W: Write>(out: &mut W, result: &AnalysisResult, limit: usize) -> io::Result<()> {
    let total = result.twin_primes.len();
    if total == 0 {
        writeln!(out, "Twin primes")?;
        return writeln!(out, "  No twin primes found in this range.");
    }

    let shown = total.min(limit);
    writeln!(out, "Twin primes (showing {shown} of {})", group_thousands(total))?;
    for pair in result.twin_primes.iter().take(shown) {
        writeln!(
            out,
            "  ({}, {})",
            group_thousands(pair.first()),
            group_thousands(pair.second())
        )?;
    }
    Ok(())
}

/// `#` bar proportional to `value / peak`, at least one mark for non-zero.
fn bar(value: u64, peak: u64) -> String {
    if peak == 0 || value == 0 {
        return String::new();
    }
    let len = ((value as f64 / peak as f64) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}
