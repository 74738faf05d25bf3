//! Colorful console output for matcher events.
//!
//! Provides a custom `tracing` layer that formats RideMatch events with
//! colors. Everything is written to stderr; stdout is reserved for match
//! results.
//!
//! ## Log Levels
//!
//! - **INFO**: Load and match lifecycle (`load_end`, `match_start`, `match_end`)
//! - **DEBUG**: Offers that can never match
//! - **TRACE**: Individual partition scans

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Initializes console logging at `info`.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` controls crates outside the workspace.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console logging with `level` as the default for RideMatch
/// crates.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
            .add_directive(
                format!("ridematch={}", level)
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            );

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RideMatchConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

/// A tracing layer that formats matcher events with colors.
pub struct RideMatchConsoleLayer;

impl<S: Subscriber> Layer<S> for RideMatchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from matcher crates
        if !metadata.target().starts_with("ridematch") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    query: Option<String>,
    service: Option<String>,
    offers: Option<u64>,
    partitions: Option<u64>,
    partition: Option<u64>,
    threads: Option<u64>,
    matched: Option<u64>,
    duration_ms: Option<u64>,
    line: Option<u64>,
    query_line: Option<u64>,
    start: Option<u64>,
    end: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s.trim_matches('"').to_string()),
            "query" => self.query = Some(s.trim_matches('"').to_string()),
            "service" => self.service = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "offers" => self.offers = Some(value),
            "partitions" => self.partitions = Some(value),
            "partition" => self.partition = Some(value),
            "threads" => self.threads = Some(value),
            "matched" => self.matched = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "line" => self.line = Some(value),
            "query_line" => self.query_line = Some(value),
            "start" => self.start = Some(value),
            "end" => self.end = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "query" => self.query = Some(value.to_string()),
            "service" => self.service = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("load_end") => format_load_end(v),
        Some("match_start") => format_match_start(v),
        Some("match_end") => format_match_end(v),
        Some("unsatisfiable_offer") => format_unsatisfiable(v),
        Some("partition_scanned") => format_partition(v, level),
        Some(_) => String::new(),
        None => format_message(v, level),
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

fn format_load_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Loaded {} offers │ query on line {}",
        format_elapsed(),
        "●".bright_green().bold(),
        count(v.offers).bright_yellow(),
        count(v.query_line).white()
    )
}

fn format_match_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Matching │ {} offers │ {} partitions │ query {}",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.offers).bright_yellow(),
        count(v.partitions).bright_yellow(),
        v.query.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_match_end(v: &EventVisitor) -> String {
    let matched = v.matched.unwrap_or(0);
    let matched_str = if matched == 0 {
        count(v.matched).bright_red().to_string()
    } else {
        count(v.matched).bright_green().bold().to_string()
    };

    let workers = match v.threads.unwrap_or(0) {
        0 => "calling thread".to_string(),
        n => format!("{} threads", n.to_formatted_string(&Locale::en)),
    };

    format!(
        "{} {} Matching complete │ {} matched │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        matched_str,
        workers.white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_unsatisfiable(v: &EventVisitor) -> String {
    format!(
        "{} {} Offer '{}' on line {} has an inverted interval and never matches",
        format_elapsed(),
        "!".yellow().bold(),
        v.service.as_deref().unwrap_or("?"),
        count(v.line)
    )
}

fn format_partition(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Partition {:>4} │ {}..{} │ {} matched",
        format_elapsed(),
        "·".bright_black(),
        count(v.partition).bright_black(),
        v.start.unwrap_or(0),
        v.end.unwrap_or(0),
        count(v.matched).bright_black()
    )
}

fn format_message(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    let tag = match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => "WARN".yellow().bold().to_string(),
        _ => level.to_string().bright_black().to_string(),
    };

    format!("{} {} {}", format_elapsed(), tag, message)
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

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_partition_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("partition_scanned".to_string()),
            partition: Some(2),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(!format_event(&visitor, Level::TRACE).is_empty());
    }

    #[test]
    fn test_match_end_mentions_counts() {
        let visitor = EventVisitor {
            event: Some("match_end".to_string()),
            matched: Some(1234),
            threads: Some(4),
            duration_ms: Some(3),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("1,234"));
        assert!(output.contains("4 threads"));
        assert!(output.contains("3ms"));
    }

    #[test]
    fn test_plain_message() {
        let visitor = EventVisitor {
            message: Some("hello".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::WARN).contains("hello"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_level(LevelFilter::TRACE);
    }
}
