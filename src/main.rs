use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use sortviz::core::config::{self, CliOverrides, ResolvedConfig, SortvizConfig};
use sortviz::core::state::App;
use sortviz::{CancellationToken, Direction, quick_sort};

#[derive(Parser)]
#[command(name = "sortviz", about = "Step-animated quicksort in the terminal")]
struct Args {
    /// Pause at each visual step, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Number of random values to sort
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Largest random value
    #[arg(long)]
    max_value: Option<u32>,

    /// Sort direction
    #[arg(short, long, value_enum)]
    direction: Option<Direction>,

    /// Seed for the random array and shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Explicit comma-separated input, e.g. `--values 5,3,1`
    #[arg(long, value_delimiter = ',')]
    values: Option<Vec<u32>>,

    /// Sort once without the terminal UI and print the result
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            delay_ms: self.delay_ms,
            item_count: self.count,
            max_value: self.max_value,
            direction: self.direction,
            seed: self.seed,
            values: self.values.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sortviz.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sortviz.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        SortvizConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.overrides());
    info!("sortviz starting up with {:?}", resolved);

    if args.headless {
        run_headless(resolved).await;
        return Ok(());
    }

    sortviz::tui::run(resolved)
}

async fn run_headless(config: ResolvedConfig) {
    let mut app = App::from_config(&config);
    let stop = CancellationToken::new();
    let comparator = app.direction.comparator::<u32>();
    let mut delay = app.delay.clone();

    // Ctrl+C stops the sort instead of killing the process
    let ctrl_c = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl+C received, cancelling headless sort");
            ctrl_c.cancel();
        }
    });

    println!("input:  {:?}", app.values());
    quick_sort(&mut app.items, comparator, &mut delay, &stop).await;
    if stop.is_cancel_requested() {
        println!("output: {:?} (stopped early)", app.values());
    } else {
        println!("output: {:?}", app.values());
    }
}
