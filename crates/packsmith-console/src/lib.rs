//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats `packsmith_solver` events
//! with colors. Everything else goes through a compact fmt layer.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end per order, service lifecycle
//! - **DEBUG**: Bounded search summaries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str =
    "packsmith_solver=info,packsmith_store=info,packsmith_service=info,tower_http=info";

const SOLVER_TARGET: &str = "packsmith_solver";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Packsmith banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let fmt = tracing_subscriber::fmt::layer()
            .compact()
            .with_filter(filter_fn(|metadata: &tracing::Metadata<'_>| {
                !is_solver_target(metadata.target())
            }));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PackConsoleLayer)
            .with(fmt)
            .try_init();
    });
}

fn is_solver_target(target: &str) -> bool {
    target.starts_with(SOLVER_TARGET)
}

fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 ____            _                    _ _   _
|  _ \ __ _  ___| | _____ _ __ ___ (_) |_| |__
| |_) / _` |/ __| |/ / __| '_ ` _ \| | __| '_ \
|  __/ (_| | (__|   <\__ \ | | | | | | |_| | | |
|_|   \__,_|\___|_|\_\___/_| |_| |_|_|\__|_| |_|
"#;

    let version_line = format!("              v{} - Pack Combination Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct PackConsoleLayer;

impl<S: Subscriber> Layer<S> for PackConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !is_solver_target(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    case: Option<String>,
    mode: Option<String>,
    score: Option<String>,
    quantity: Option<u64>,
    size_count: Option<u64>,
    target: Option<u64>,
    total: Option<u64>,
    overshoot: Option<u64>,
    pack_count: Option<u64>,
    nodes: Option<u64>,
    candidates: Option<u64>,
    pruned: Option<u64>,
    duration_us: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "case" => self.case = Some(s),
            "mode" => self.mode = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "quantity" => self.quantity = Some(value),
            "size_count" => self.size_count = Some(value),
            "target" => self.target = Some(value),
            "total" => self.total = Some(value),
            "overshoot" => self.overshoot = Some(value),
            "pack_count" => self.pack_count = Some(value),
            "nodes" => self.nodes = Some(value),
            "candidates" => self.candidates = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "case" => self.case = Some(value.to_string()),
            "mode" => self.mode = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "search" => format_search(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    let quantity = v.quantity.unwrap_or(0);
    let sizes = v.size_count.unwrap_or(0);

    format!(
        "{} {} Solving │ {} items │ {} pack sizes",
        format_elapsed(),
        "▶".bright_green().bold(),
        quantity.to_formatted_string(&Locale::en).bright_yellow(),
        sizes.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let case = v.case.as_deref().unwrap_or("Unknown");
    let score = v.score.as_deref().unwrap_or("N/A");
    let overshoot = v.overshoot.unwrap_or(0);

    let mut output = format!(
        "{} {} Solved │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        case.white().bold(),
        format_score(score),
    );

    if overshoot > 0 {
        output.push_str(&format!(
            " │ {} over",
            format!("+{}", overshoot.to_formatted_string(&Locale::en)).yellow()
        ));
    } else {
        output.push_str(&format!(" │ {}", "exact".bright_green()));
    }

    if let Some(nodes) = v.nodes.filter(|&n| n > 0) {
        output.push_str(&format!(
            " │ {} nodes",
            nodes.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    if let Some(us) = v.duration_us {
        output.push_str(&format!(" │ {}", format_duration_us(us).yellow()));
    }

    output
}

fn format_search(v: &EventVisitor, level: Level) -> String {
    if level > Level::DEBUG {
        return String::new();
    }

    let target = v.target.unwrap_or(0);
    let nodes = v.nodes.unwrap_or(0);
    let candidates = v.candidates.unwrap_or(0);
    let pruned = v.pruned.unwrap_or(0);
    let mode = v.mode.as_deref().unwrap_or("Sequential");

    format!(
        "{} {} Search {} │ target {} │ {} nodes │ {} candidates │ {} pruned",
        format_elapsed(),
        "⚡".bright_cyan(),
        mode.bright_black(),
        target.to_formatted_string(&Locale::en).white(),
        nodes.to_formatted_string(&Locale::en).bright_magenta(),
        candidates.to_formatted_string(&Locale::en).white(),
        pruned.to_formatted_string(&Locale::en).bright_black(),
    )
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

/// Colors a `<total>total/<packs>packs` score.
fn format_score(score: &str) -> String {
    let parts: Vec<&str> = score.split('/').collect();
    if let [total, packs] = parts.as_slice() {
        if let (Some(total), Some(packs)) = (
            total.strip_suffix("total").and_then(|t| t.parse::<u64>().ok()),
            packs.strip_suffix("packs").and_then(|p| p.parse::<u64>().ok()),
        ) {
            return format!(
                "{} total / {} packs",
                total.to_formatted_string(&Locale::en).bright_cyan().bold(),
                packs.to_formatted_string(&Locale::en).bright_magenta().bold(),
            );
        }
    }

    score.white().to_string()
}
