//! Prints the upcoming long weekends of a year to stdout.
//!
//! Usage: `long_weekends [YEAR] [--five-day|--six-day] [--no-cuti]`

use std::time::Duration;

use anyhow::{anyhow, bail};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use liburku_backend::{
    config::Config,
    models::{LongWeekendOpportunity, WorkWeekPolicy},
    services::{
        holiday_source::{load_holidays, DayOffApiSource},
        long_weekend,
    },
    utils::time,
    validation::{MAX_YEAR, MIN_YEAR},
};

#[derive(Debug, Default)]
struct Args {
    year: Option<i32>,
    saturday_is_workday: Option<bool>,
    include_collective_leave: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args {
        include_collective_leave: true,
        ..Args::default()
    };

    for arg in args {
        match arg.as_str() {
            "--five-day" => parsed.saturday_is_workday = Some(false),
            "--six-day" => parsed.saturday_is_workday = Some(true),
            "--no-cuti" => parsed.include_collective_leave = false,
            value => {
                let year: i32 = value
                    .parse()
                    .map_err(|_| anyhow!("Unknown argument: {}", value))?;
                if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                    bail!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR);
                }
                parsed.year = Some(year);
            }
        }
    }

    Ok(parsed)
}

fn print_opportunity(opportunity: &LongWeekendOpportunity) {
    println!(
        "{:>2} hari  {:<26} {}",
        opportunity.duration_days,
        opportunity.title(),
        opportunity.date_range()
    );
    println!("         {}", opportunity.holiday_name());
    if let Some(suggestion) = &opportunity.leave_suggestion {
        println!("         Saran: {}", suggestion);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the listing stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liburku_backend=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = Config::load()?;

    let source = DayOffApiSource::new(
        config.holiday_api_url.clone(),
        Duration::from_secs(config.holiday_api_timeout_seconds),
    )?;

    let year = args
        .year
        .unwrap_or_else(|| time::current_year(&config.time_zone));
    let today = time::today_local(&config.time_zone);
    let holidays = load_holidays(&source, year, None).await;

    let opportunities = match args.saturday_is_workday {
        Some(saturday_is_workday) => long_weekend::analyze(
            &holidays,
            year,
            WorkWeekPolicy {
                saturday_is_workday,
                include_collective_leave: args.include_collective_leave,
            },
            today,
        ),
        None => long_weekend::analyze_all_schedules(
            &holidays,
            year,
            args.include_collective_leave,
            today,
        ),
    };

    println!("Perencana Libur Panjang {}", year);
    println!("---");
    for opportunity in &opportunities {
        print_opportunity(opportunity);
    }
    println!("---");
    println!("Total: {} libur panjang", opportunities.len());

    Ok(())
}
