//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use nextcomb_config::InputKind;

use crate::result::BenchmarkSuite;

/// Plain-text summary, one block per sweep.
///
/// # Example
///
/// ```
/// use nextcomb_benchmark::{sweep, BenchmarkSuite, TextReport};
/// use nextcomb_config::InputKind;
/// use nextcomb_core::Variant;
///
/// let mut suite = BenchmarkSuite::new(InputKind::Distinct);
/// suite.add_sweep(sweep(Variant::Visitor, 3, InputKind::Distinct));
///
/// let text = TextReport::to_string(&suite);
/// assert!(text.starts_with("visitor (n = 3):\n  value comparisons: 0\n"));
/// ```
pub struct TextReport;

impl TextReport {
    /// Renders the summary.
    pub fn to_string(suite: &BenchmarkSuite) -> String {
        suite.to_string()
    }

    /// Writes the summary to a writer.
    pub fn write<W: Write>(suite: &BenchmarkSuite, mut writer: W) -> io::Result<()> {
        write!(writer, "{suite}")
    }
}

/// CSV exporter for benchmark results.
///
/// One row per subset size of every sweep.
///
/// # Example
///
/// ```
/// use nextcomb_benchmark::{sweep, BenchmarkSuite, CsvExporter};
/// use nextcomb_config::InputKind;
/// use nextcomb_core::Variant;
///
/// let mut suite = BenchmarkSuite::new(InputKind::Distinct);
/// suite.add_sweep(sweep(Variant::GappedRotation, 2, InputKind::Distinct));
///
/// let csv = CsvExporter::to_string(&suite);
/// assert!(csv.starts_with("variant,length,r,combinations,"));
/// assert_eq!(csv.lines().count(), 4);
/// assert!(csv.contains("\ngapped_rotation,2,1,2,"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports the suite to a CSV string.
    pub fn to_string(suite: &BenchmarkSuite) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(suite, &mut output);
        output
    }

    fn render(suite: &BenchmarkSuite, out: &mut String) -> fmt::Result {
        writeln!(
            out,
            "variant,length,r,combinations,value_comparisons,value_swaps,iter_comparisons,iter_increments"
        )?;
        for sweep in &suite.sweeps {
            for subset in &sweep.subsets {
                writeln!(
                    out,
                    "{},{},{},{},{},{},{},{}",
                    sweep.variant,
                    sweep.length,
                    subset.r,
                    subset.combinations,
                    subset.counts.value_comparisons,
                    subset.counts.value_swaps,
                    subset.counts.cursor_comparisons,
                    subset.counts.cursor_steps,
                )?;
            }
        }
        Ok(())
    }

    /// Exports the suite to a CSV file.
    pub fn to_file(suite: &BenchmarkSuite, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(suite))
    }

    /// Writes the suite as CSV to a writer.
    pub fn write<W: Write>(suite: &BenchmarkSuite, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(suite).as_bytes())
    }
}

/// Markdown report generator.
///
/// The report opens with run metadata and a comparison table per length,
/// followed by the per-subset breakdown of each sweep.
///
/// # Example
///
/// ```
/// use nextcomb_benchmark::{sweep, BenchmarkSuite, MarkdownReport};
/// use nextcomb_config::InputKind;
/// use nextcomb_core::Variant;
///
/// let mut suite = BenchmarkSuite::new(InputKind::Distinct);
/// suite.add_sweep(sweep(Variant::ReversalScan, 3, InputKind::Distinct));
///
/// let md = MarkdownReport::to_string(&suite);
/// assert!(md.starts_with("# Benchmark: next combination"));
/// assert!(md.contains("## Comparison"));
/// assert!(md.contains("### reversal_scan (n = 3)"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(suite: &BenchmarkSuite) -> String {
        let mut output = String::new();
        let _ = Self::render(suite, &mut output);
        output
    }

    fn render(suite: &BenchmarkSuite, out: &mut String) -> fmt::Result {
        writeln!(out, "# Benchmark: next combination")?;
        writeln!(out)?;
        writeln!(out, "- **Input**: {}", describe_input(suite.input))?;
        writeln!(out, "- **Sweeps**: {}", suite.sweep_count())?;
        writeln!(
            out,
            "- **Total time**: {:.2} ms",
            suite.elapsed.as_secs_f64() * 1000.0
        )?;
        writeln!(out)?;

        if suite.sweeps.is_empty() {
            writeln!(out, "*No sweeps completed.*")?;
            return Ok(());
        }

        out.push_str(&Self::comparison(suite));
        writeln!(out)?;

        writeln!(out, "## Sweep Details")?;
        for sweep in &suite.sweeps {
            writeln!(out)?;
            writeln!(out, "### {} (n = {})", sweep.variant, sweep.length)?;
            writeln!(out)?;
            writeln!(
                out,
                "| r | Combinations | Value cmp | Value swaps | Iter cmp | Iter inc |"
            )?;
            writeln!(
                out,
                "|---|--------------|-----------|-------------|----------|----------|"
            )?;
            for subset in &sweep.subsets {
                writeln!(
                    out,
                    "| {} | {} | {} | {} | {} | {} |",
                    subset.r,
                    subset.combinations,
                    subset.counts.value_comparisons,
                    subset.counts.value_swaps,
                    subset.counts.cursor_comparisons,
                    subset.counts.cursor_steps,
                )?;
            }
        }
        Ok(())
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(suite: &BenchmarkSuite, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(suite))
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(suite: &BenchmarkSuite, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(suite).as_bytes())
    }
}

/// Generates a comparison table of all sweeps, grouped by length.
///
/// The cheapest variant of each length by total operations is marked in bold.
impl MarkdownReport {
    /// Generates the comparison section.
    pub fn comparison(suite: &BenchmarkSuite) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(suite, &mut output);
        output
    }

    fn render_comparison(suite: &BenchmarkSuite, out: &mut String) -> fmt::Result {
        writeln!(out, "## Comparison")?;
        writeln!(out)?;
        writeln!(
            out,
            "| Variant | n | Combinations | Value cmp | Value swaps | Iter cmp | Iter inc | Ops/comb | Time (ms) |"
        )?;
        writeln!(
            out,
            "|---------|---|--------------|-----------|-------------|----------|----------|----------|-----------|"
        )?;

        for length in suite.lengths() {
            let cheapest = suite.cheapest(length).map(|s| s.variant);
            for sweep in suite.for_length(length) {
                let name = if Some(sweep.variant) == cheapest {
                    format!("**{}**", sweep.variant)
                } else {
                    sweep.variant.to_string()
                };
                writeln!(
                    out,
                    "| {} | {} | {} | {} | {} | {} | {} | {:.1} | {:.2} |",
                    name,
                    sweep.length,
                    sweep.combinations(),
                    sweep.counts.value_comparisons,
                    sweep.counts.value_swaps,
                    sweep.counts.cursor_comparisons,
                    sweep.counts.cursor_steps,
                    sweep.ops_per_combination(),
                    sweep.elapsed.as_secs_f64() * 1000.0,
                )?;
            }
        }
        Ok(())
    }
}

fn describe_input(input: InputKind) -> String {
    match input {
        InputKind::Distinct => "distinct values".to_string(),
        InputKind::Duplicates { values, seed } => {
            format!("duplicates from {values} values (seed {seed})")
        }
    }
}
