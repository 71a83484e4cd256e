use seabattle::{init_logging, AiPlayer, Outcome, Session, Statistics};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct GameReport {
    seed: u64,
    winner: Option<&'static str>,
    rounds: usize,
    user: Statistics,
    computer: Statistics,
}

fn main() -> anyhow::Result<()> {
    init_logging(None);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut reports = Vec::new();
    for game in 0..games {
        let game_seed = seed.wrapping_add(game);
        let mut session = Session::new(
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
            SmallRng::seed_from_u64(game_seed),
            std::io::sink(),
        )?;
        session.setup()?;
        let winner = match session.run()? {
            Outcome::Winner(name) => Some(name),
            Outcome::Quit => None,
        };
        reports.push(GameReport {
            seed: game_seed,
            winner,
            rounds: session.rounds(),
            user: session.user().statistics(),
            computer: session.computer().statistics(),
        });
    }

    let wins = |name: &str| reports.iter().filter(|r| r.winner == Some(name)).count();
    let user_wins = wins(seabattle::USER_NAME);
    let computer_wins = wins(seabattle::COMPUTER_NAME);
    let result = serde_json::json!({
        "games": reports.len(),
        "user_wins": user_wins,
        "computer_wins": computer_wins,
        "reports": reports,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
