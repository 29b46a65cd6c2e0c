//! Colorful console output for benchmark runs.
//!
//! Provides a custom `tracing` layer that formats harness events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark/sweep start and end, reports written)
//! - **DEBUG**: Per-subset counts within a sweep

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directive applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "nextcomb_benchmark=info";

/// Initializes the benchmark console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing; `RUST_LOG` overrides the default
/// filter, e.g. `RUST_LOG=nextcomb_benchmark=debug` adds per-subset lines.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let directive = DEFAULT_DIRECTIVE
            .parse::<Directive>()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchmarkConsoleLayer)
            .try_init();
    });
}

// Marks the start of a benchmark run for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let title = format!("nextcomb v{VERSION}");
    let subtitle = "in-place combination enumeration, operation counts";

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = writeln!(stdout, "  {}", title.bright_cyan().bold());
    let _ = writeln!(stdout, "  {}", subtitle.bright_white());
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct BenchmarkConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchmarkConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("nextcomb_benchmark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    variant: Option<String>,
    lengths: Option<String>,
    input: Option<String>,
    format: Option<String>,
    path: Option<String>,
    n: Option<u64>,
    r: Option<u64>,
    combinations: Option<u64>,
    value_comparisons: Option<u64>,
    value_swaps: Option<u64>,
    iter_comparisons: Option<u64>,
    iter_increments: Option<u64>,
    variant_count: Option<u64>,
    sweeps: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "variant" => self.variant = Some(s.trim_matches('"').to_string()),
            "lengths" => self.lengths = Some(s),
            "input" => self.input = Some(s),
            "path" => self.path = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "r" => self.r = Some(value),
            "combinations" => self.combinations = Some(value),
            "value_comparisons" => self.value_comparisons = Some(value),
            "value_swaps" => self.value_swaps = Some(value),
            "iter_comparisons" => self.iter_comparisons = Some(value),
            "iter_increments" => self.iter_increments = Some(value),
            "variant_count" => self.variant_count = Some(value),
            "sweeps" => self.sweeps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "variant" => self.variant = Some(value.to_string()),
            "format" => self.format = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_end" => format_benchmark_end(v),
        "sweep_start" => format_sweep_start(v),
        "sweep_end" => format_sweep_end(v),
        "subset_end" => format_subset_end(v),
        "report_written" => format_report_written(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    mark_run_start();
    let lengths = v.lengths.as_deref().unwrap_or("[]");
    let input = v.input.as_deref().unwrap_or("Distinct");

    format!(
        "{} {} Benchmark │ lengths {} │ {} variants │ input {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        lengths.bright_yellow(),
        count(v.variant_count).bright_yellow(),
        input.bright_magenta()
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark complete │ {} sweeps │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.sweeps).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_sweep_start(v: &EventVisitor) -> String {
    let variant = v.variant.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {} (n = {}) started",
        format_elapsed(),
        "▶".bright_blue(),
        variant.white().bold(),
        v.n.unwrap_or(0)
    )
}

fn format_sweep_end(v: &EventVisitor) -> String {
    let variant = v.variant.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {} (n = {}) ended │ {} │ {} combinations │ {} cmp │ {} swaps │ {} iter cmp │ {} iter inc",
        format_elapsed(),
        "◀".bright_blue(),
        variant.white().bold(),
        v.n.unwrap_or(0),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.combinations).white(),
        count(v.value_comparisons).bright_magenta().bold(),
        count(v.value_swaps).bright_magenta().bold(),
        count(v.iter_comparisons).bright_magenta(),
        count(v.iter_increments).bright_magenta(),
    )
}

fn format_subset_end(v: &EventVisitor) -> String {
    format!(
        "{} {} r = {:>2} │ {:>12} combinations │ {:>12} cmp │ {:>12} swaps",
        format_elapsed(),
        "·".bright_black(),
        v.r.unwrap_or(0),
        count(v.combinations).bright_black(),
        count(v.value_comparisons).bright_black(),
        count(v.value_swaps).bright_black(),
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} {} report │ {}",
        format_elapsed(),
        "✓".bright_green(),
        v.format.as_deref().unwrap_or("unknown").white().bold(),
        v.path.as_deref().unwrap_or("").bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep_end() -> EventVisitor {
        EventVisitor {
            event: Some("sweep_end".to_string()),
            variant: Some("reversal_scan".to_string()),
            n: Some(20),
            combinations: Some(1_048_576),
            value_comparisons: Some(12_345_678),
            value_swaps: Some(42),
            iter_comparisons: Some(7),
            iter_increments: Some(8),
            duration_ms: Some(1500),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_sweep_end_line() {
        let line = format_event(&sweep_end());
        assert!(line.contains("reversal_scan"));
        assert!(line.contains("(n = 20) ended"));
        assert!(line.contains("1,048,576"));
        assert!(line.contains("12,345,678"));
        assert!(line.contains("1.50s"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("phase_start".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_subset_and_report_lines() {
        let v = EventVisitor {
            event: Some("subset_end".to_string()),
            r: Some(3),
            combinations: Some(1140),
            ..EventVisitor::default()
        };
        let line = format_event(&v);
        assert!(line.contains("r =  3"));
        assert!(line.contains("1,140"));

        let v = EventVisitor {
            event: Some("report_written".to_string()),
            format: Some("csv".to_string()),
            path: Some("out/sweeps.csv".to_string()),
            ..EventVisitor::default()
        };
        let line = format_event(&v);
        assert!(line.contains("csv"));
        assert!(line.contains("out/sweeps.csv"));
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(2500), "2.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(DEFAULT_DIRECTIVE.parse::<Directive>().is_ok());
    }
}
