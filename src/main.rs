#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{init_logging, ui, AiPlayer, CliPlayer, Outcome, Session};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play battleship against the computer in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Place your fleet at random without asking")]
    auto_place: bool,
    #[arg(long, help = "Log level (error, warn, info, debug, trace); overrides BATTLESHIP_LOG")]
    log_level: Option<String>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    println!("\n{}", ui::welcome());

    let human = CliPlayer::stdio().with_auto_place(cli.auto_place);
    let mut session = Session::new(
        Box::new(human),
        Box::new(AiPlayer::new()),
        rng,
        std::io::stdout(),
    )?;
    session.setup()?;
    if session.run()? == Outcome::Quit {
        println!("Goodbye.");
    }
    Ok(())
}
