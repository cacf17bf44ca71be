// Change Heatmap
// Terminal host for the heatmap engine

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use change_heatmap::models::{Category, CategoryFilters, Window};
use change_heatmap::services::config::ConfigService;
use change_heatmap::services::event_source::load_events;
use change_heatmap::services::heatmap::{build_heatmap, HeatmapRequest, PeriodReporter};
use change_heatmap::ui_terminal::{render_grid, render_legend, TerminalStyle};
use change_heatmap::utils::date::today_local;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render add/change/delete activity as a calendar heatmap",
    long_about = None
)]
struct Cli {
    /// JSON file holding an array of {timestamp, type, message} records
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Trailing window in months (1, 3, 6 or 12); defaults to the config value
    #[arg(short, long)]
    window: Option<u32>,

    #[arg(long)]
    hide_add: bool,

    #[arg(long)]
    hide_change: bool,

    #[arg(long)]
    hide_delete: bool,

    /// Last day shown (YYYY-MM-DD); defaults to today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the summary for this day (YYYY-MM-DD)
    #[arg(long)]
    describe: Option<NaiveDate>,

    /// Config file; defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// ASCII output without colour
    #[arg(long)]
    plain: bool,

    /// Emit the render description as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn filters(&self) -> CategoryFilters {
        CategoryFilters::all()
            .with(Category::Add, !self.hide_add)
            .with(Category::Change, !self.hide_change)
            .with(Category::Delete, !self.hide_delete)
    }

    fn style(&self) -> TerminalStyle {
        if self.plain {
            TerminalStyle::Plain
        } else {
            TerminalStyle::TrueColor
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting change heatmap");

    let config = match &cli.config {
        Some(path) => ConfigService::load(path)?,
        None => ConfigService::load_default()?,
    };

    let window = match cli.window {
        Some(months) => Window::try_from(months).context("invalid --window")?,
        None => config.default_window,
    };

    let events = match &cli.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };

    let mut reporter = PeriodReporter::with_listener(|period| {
        log::info!("Heatmap period: {} to {}", period.start, period.end);
    });
    let request = HeatmapRequest {
        events: &events,
        window,
        filters: cli.filters(),
        today: cli.today.unwrap_or_else(today_local),
    };
    let view = build_heatmap(&request, &config.grid, &mut reporter);

    if cli.json {
        let json = serde_json::to_string_pretty(&view).context("failed to serialise heatmap")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "{} ({} to {}), {} events shown, {} dropped",
        window,
        view.period.start,
        view.period.end,
        view.stats.accepted,
        view.stats.dropped()
    );
    println!();
    println!("{}", render_grid(&view, cli.style()));
    println!();
    println!("{}", render_legend(cli.style()));

    if let Some(date) = cli.describe {
        println!();
        match view.describe(date) {
            Some(summary) => println!("{}", summary.tooltip()),
            None => println!("{} is outside the displayed period", date),
        }
    }

    Ok(())
}
