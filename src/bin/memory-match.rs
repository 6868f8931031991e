use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memory_match::{CardSet, GameConfig, GameSession, JsonFileStore, Position, TapOutcome, TimerQueue, ViewState};

const COLUMNS: usize = 4;

#[derive(Debug, Parser)]
#[command(name = "memory-match", about = "Play the memory-matching card game in a terminal")]
struct Args {
    /// Fixed deal seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// File the best score is kept in
    #[arg(long, default_value = "memory-match.json")]
    store: PathBuf,

    /// JSON config file (delays, storage key, seed)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<GameConfig>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = GameSession::new(
        config,
        CardSet::reference(),
        JsonFileStore::new(&args.store),
        TimerQueue::new(),
    )?;

    println!("Flip the cards to find the matching pairs.");
    println!("Commands: <n> or tap <n>, restart, quit");
    render(&session.view());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            Some("quit") | Some("q") => break,
            Some("restart") | Some("r") => session.on_restart(),
            Some("tap") | Some("t") => match words.next().and_then(|w| w.parse().ok()) {
                Some(n) => tap(&mut session, n),
                None => println!("usage: tap <n>"),
            },
            Some(word) => match word.parse() {
                Ok(n) => tap(&mut session, n),
                Err(_) => println!("unknown command: {}", word),
            },
            None => continue,
        }

        let view = session.view();
        render(&view);
        if let Some(done) = view.completion {
            println!(
                "You completed the game in {} moves. Your best score is {} moves. Type 'restart' to play again.",
                done.moves, done.best
            );
        }
        io::stdout().flush()?;
    }

    Ok(())
}

fn tap(session: &mut GameSession<JsonFileStore, TimerQueue>, n: u16) {
    match session.on_card_tap(Position::new(n)) {
        TapOutcome::Ignored(reason) => println!("ignored: {:?}", reason),
        TapOutcome::Opened(_) => {}
        TapOutcome::PairOpened { .. } => {
            render(&session.view());
            // Show the pair in real time until the turn resolves
            while let Some(due) = session.scheduler().next_due() {
                let wait = due.saturating_sub(session.scheduler().now());
                thread::sleep(wait);
                session.advance(wait);
            }
        }
    }
}

fn render(view: &ViewState) {
    for row in view.cards.chunks(COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| {
                let face = if card.is_inactive {
                    "--".to_string()
                } else if card.is_flipped {
                    card.name.clone()
                } else {
                    format!("{:>2}", card.position.0)
                };
                format!("[{:^12}]", face)
            })
            .collect();
        println!("{}", cells.join(" "));
    }
    println!("Best score: {}   Your moves: {}", view.best_score, view.move_count);
}
