use std::path::PathBuf;

use clap::Parser;
use densquiz::{App, Settings, init_logging, round_to_json};
use densquiz_core::QuizRound;
use rand::{Rng, SeedableRng, rngs::SmallRng};

#[derive(Parser, Debug)]
#[command(name = "densquiz")]
#[command(about = "Guess which marker is the mean, median and mode of a density plot")]
struct Args {
    /// Path to the data directory (default: ~/.densquiz/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seed for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Number of values drawn per round
    #[arg(short = 'n', long)]
    sample_size: Option<usize>,

    /// Kernel bandwidth of the density estimate
    #[arg(short, long)]
    bandwidth: Option<f64>,

    /// Print one round as JSON and exit
    #[arg(long)]
    json: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".densquiz")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _guard = init_logging(&data_dir, &args.log_level)?;

    let settings = Settings::load_or_default(&data_dir).with_overrides(
        args.seed,
        args.sample_size,
        args.bandwidth,
    );
    let config = settings.round_config();
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        seed,
        sample_size = config.sample_size,
        bandwidth = config.bandwidth,
        "Starting session"
    );

    if args.json {
        let round = QuizRound::generate(&config, &mut SmallRng::seed_from_u64(seed))?;
        println!("{}", round_to_json(&round, true)?);
        return Ok(());
    }

    let mut app = App::new(config, seed);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!(rounds = app.state().round_number, "Application shutting down");

    Ok(())
}
