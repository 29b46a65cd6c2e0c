//! Tests for the benchmark harness.

use super::*;
use nextcomb_config::{ConfigError, HarnessConfig, InputKind};
use nextcomb_core::{OpCounts, Variant};
use nextcomb_test::{binomial, distinct_selections};

#[test]
fn test_sweep_visits_every_combination() {
    for variant in Variant::ALL {
        let result = sweep(variant, 6, InputKind::Distinct);
        assert_eq!(result.subsets.len(), 7, "{variant}");
        for subset in &result.subsets {
            assert_eq!(subset.combinations, binomial(6, subset.r), "{variant}, r {}", subset.r);
        }
        assert_eq!(result.combinations(), 64, "{variant}");
    }
}

#[test]
fn test_subset_counts_add_up_to_totals() {
    let result = sweep(Variant::LinearRotation, 7, InputKind::Distinct);
    let summed: OpCounts = result.subsets.iter().map(|s| s.counts).sum();
    assert_eq!(summed, result.counts);
    assert!(result.counts.value_comparisons > 0);
    assert!(result.counts.value_swaps > 0);
    assert!(result.counts.cursor_comparisons > 0);
    assert!(result.counts.cursor_steps > 0);
}

#[test]
fn test_sweeps_are_deterministic() {
    for variant in Variant::ALL {
        let a = sweep(variant, 8, InputKind::Distinct);
        let b = sweep(variant, 8, InputKind::Distinct);
        assert_eq!(a.counts, b.counts, "{variant}");
        assert_eq!(a.subsets, b.subsets, "{variant}");
    }
}

#[test]
fn test_trivial_subsets_do_no_value_work() {
    for variant in Variant::ALL {
        let result = sweep(variant, 5, InputKind::Distinct);
        for subset in [result.subsets[0], result.subsets[5]] {
            assert_eq!(subset.combinations, 1);
            assert_eq!(subset.counts.value_comparisons, 0, "{variant}");
            assert_eq!(subset.counts.value_swaps, 0, "{variant}");
        }
    }
}

#[test]
fn test_visitor_makes_no_value_comparisons() {
    let result = sweep(Variant::Visitor, 6, InputKind::Distinct);
    assert_eq!(result.counts.value_comparisons, 0);
    assert!(result.counts.value_swaps > 0);
}

#[test]
fn test_empty_length() {
    let result = sweep(Variant::GappedRotation, 0, InputKind::Distinct);
    assert_eq!(result.subsets.len(), 1);
    assert_eq!(result.combinations(), 1);
}

#[test]
fn test_duplicate_input_visits_distinct_selections() {
    let input = InputKind::Duplicates { values: 3, seed: 5 };
    let values = build_input(input, 7);

    for variant in [Variant::GappedRotation, Variant::ReversalScan, Variant::LinearRotation] {
        let result = sweep(variant, 7, input);
        for subset in &result.subsets {
            let expected = distinct_selections(&values, subset.r).len() as u64;
            assert_eq!(subset.combinations, expected, "{variant}, r {}", subset.r);
        }
    }

    // The visitor enumerates positions, not values.
    let result = sweep(Variant::Visitor, 7, input);
    assert_eq!(result.combinations(), 128);
}

#[test]
fn test_seeds_change_duplicate_input() {
    let a = build_input(InputKind::Duplicates { values: 1000, seed: 1 }, 20);
    let b = build_input(InputKind::Duplicates { values: 1000, seed: 2 }, 20);
    assert_ne!(a, b);

    let single = build_input(InputKind::Duplicates { values: 1, seed: 3 }, 5);
    assert_eq!(single, [0; 5]);
}

#[test]
fn test_text_summary_format() {
    let result = sweep(Variant::ReversalScan, 4, InputKind::Distinct);
    let text = result.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "reversal_scan (n = 4):");
    assert_eq!(
        lines[1],
        format!("  value comparisons: {}", result.counts.value_comparisons)
    );
    assert_eq!(lines[2], format!("  value swaps:       {}", result.counts.value_swaps));
    assert_eq!(
        lines[3],
        format!("  iter comparisons:  {}", result.counts.cursor_comparisons)
    );
    assert_eq!(lines[4], format!("  iter increments:   {}", result.counts.cursor_steps));
}

#[test]
fn test_run_all_order_and_lookup() {
    let config = HarnessConfig::new()
        .with_lengths([3, 5])
        .with_variants([Variant::LinearRotation, Variant::ReversalScan]);
    let suite = Benchmark::new(config).unwrap().run_all();

    let order: Vec<(Variant, usize)> = suite.sweeps.iter().map(|s| (s.variant, s.length)).collect();
    assert_eq!(
        order,
        [
            (Variant::LinearRotation, 3),
            (Variant::ReversalScan, 3),
            (Variant::LinearRotation, 5),
            (Variant::ReversalScan, 5),
        ]
    );
    assert_eq!(suite.lengths(), [3, 5]);
    assert_eq!(suite.for_length(5).count(), 2);
    assert!(suite.find(Variant::Visitor, 3).is_none());
    assert!(suite.cheapest(3).is_some());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = HarnessConfig::new().with_variants([]);
    let err = Benchmark::new(config).unwrap_err();
    assert!(matches!(err, BenchmarkError::Config(ConfigError::Invalid(_))));
}

#[test]
fn test_csv_has_row_per_subset() {
    let config = HarnessConfig::new()
        .with_lengths([4])
        .with_variants([Variant::GappedRotation, Variant::Visitor]);
    let suite = Benchmark::new(config).unwrap().run_all();
    let csv = CsvExporter::to_string(&suite);

    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 1 + 2 * 5);
    assert_eq!(
        rows[0],
        "variant,length,r,combinations,value_comparisons,value_swaps,iter_comparisons,iter_increments"
    );
    assert!(rows[1].starts_with("gapped_rotation,4,0,1,"));
    assert!(rows[8].starts_with("visitor,4,2,6,"));
}

#[test]
fn test_markdown_report_sections() {
    let config = HarnessConfig::new()
        .with_lengths([3])
        .with_variants([Variant::ReversalScan, Variant::GappedRotation])
        .with_input(InputKind::Duplicates { values: 2, seed: 4 });
    let suite = Benchmark::new(config).unwrap().run_all();
    let md = MarkdownReport::to_string(&suite);

    assert!(md.contains("- **Input**: duplicates from 2 values (seed 4)"));
    assert!(md.contains("- **Sweeps**: 2"));
    assert!(md.contains("## Comparison"));
    assert!(md.contains("| Variant | n | Combinations |"));
    assert!(md.contains("## Sweep Details"));
    assert!(md.contains("### reversal_scan (n = 3)"));
    assert!(md.contains("### gapped_rotation (n = 3)"));
    assert_eq!(md.matches("**reversal_scan**").count() + md.matches("**gapped_rotation**").count(), 1);
}

#[test]
fn test_markdown_empty_suite() {
    let suite = BenchmarkSuite::new(InputKind::Distinct);
    let md = MarkdownReport::to_string(&suite);
    assert!(md.contains("*No sweeps completed.*"));
    assert!(!md.contains("## Comparison"));
}

#[test]
fn test_write_reports_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("sweeps.csv");
    let md_path = dir.path().join("report.md");

    let config = HarnessConfig::new()
        .with_lengths([3])
        .with_variants([Variant::Visitor])
        .with_csv_path(&csv_path)
        .with_markdown_path(&md_path);
    let benchmark = Benchmark::new(config).unwrap();
    let suite = benchmark.run_all();
    benchmark.write_reports(&suite).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, CsvExporter::to_string(&suite));
    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.contains("### visitor (n = 3)"));
}

#[test]
fn test_write_reports_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("missing").join("sweeps.csv");

    let config = HarnessConfig::new().with_lengths([2]).with_csv_path(&bad);
    let benchmark = Benchmark::new(config).unwrap();
    let suite = benchmark.run_all();

    let err = benchmark.write_reports(&suite).unwrap_err();
    assert!(matches!(err, BenchmarkError::Report { .. }));
    assert!(err.to_string().contains("sweeps.csv"));
}

#[test]
fn test_text_report_separates_sweeps() {
    let mut suite = BenchmarkSuite::new(InputKind::Distinct);
    suite.add_sweep(sweep(Variant::GappedRotation, 2, InputKind::Distinct));
    suite.add_sweep(sweep(Variant::Visitor, 2, InputKind::Distinct));

    let mut buffer = Vec::new();
    TextReport::write(&suite, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.matches("  iter increments:   ").count(), 2);
    assert!(text.contains("\n\nvisitor (n = 2):\n"));
}
