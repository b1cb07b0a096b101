use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use darts::bin_support::new_match::NewMatchArgs;
use darts::bin_support::render::render_scoreboard;
use darts::config::app::parse_local_player;
use darts::domain::rules::DEFAULT_STARTING_SCORE;
use darts::domain::MatchTransition;
use darts::{
    AppConfig, AppError, CheckoutRule, FileStore, KeyValueStore, MatchSession, SessionOptions,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};

mod telemetry;

#[derive(Clone, Copy, ValueEnum)]
enum Checkout {
    Double,
    Single,
}

impl From<Checkout> for CheckoutRule {
    fn from(value: Checkout) -> Self {
        match value {
            Checkout::Double => CheckoutRule::Double,
            Checkout::Single => CheckoutRule::Single,
        }
    }
}

#[derive(Parser)]
#[command(name = "darts")]
#[command(about = "X01 darts scorekeeper")]
struct Args {
    /// Directory holding stored matches (overrides DARTS_STORE_DIR)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Use the shared match instead of the local one
    #[arg(long)]
    shared: bool,

    /// Seat (0-based) this client throws for in a shared match
    #[arg(long)]
    local_player: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new match
    New {
        /// Player name, in throwing order (2 to 6)
        #[arg(short, long = "player", required = true)]
        players: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_STARTING_SCORE)]
        start: u32,

        #[arg(short, long, value_enum, default_value = "double")]
        checkout: Checkout,

        /// Id to share the match under (needs --shared); generated when omitted
        #[arg(long)]
        match_id: Option<String>,
    },
    /// Submit one turn, e.g. `60` or `40d` for a double finish
    Throw { input: String },
    /// Print the scoreboard
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Forget the current match
    Reset,
    /// Score interactively from stdin
    Play,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    telemetry::init_tracing(args.log_json);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.store_dir.clone()));
    let mut session = MatchSession::new(store, SessionOptions::from_config(&config));

    let result = run(&mut session, args.command, config.shared).await;
    session.shutdown().await;

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn resolve_config(args: &Args) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::from_env()?;
    if let Some(dir) = &args.store_dir {
        config.store_dir = dir.clone();
    }
    if args.shared {
        config.shared = true;
    }
    if let Some(seat) = &args.local_player {
        config.local_player = Some(parse_local_player(seat)?);
    }
    Ok(config)
}

async fn run(session: &mut MatchSession, command: Command, shared: bool) -> Result<(), AppError> {
    match command {
        Command::New {
            players,
            start,
            checkout,
            match_id,
        } => {
            let setup = NewMatchArgs {
                players,
                starting_score: start,
                checkout_rule: checkout.into(),
                shared,
                match_id,
            }
            .into_setup()?;
            let m = session.start(setup).await?;
            if let Some(id) = &m.config.match_id {
                println!("Shared match id: {id}");
            }
            print_board(session);
        }
        Command::Throw { input } => {
            session.load().await;
            let outcome = session.submit(&input).await?;
            println!("{}", outcome.message());
            print_board(session);
        }
        Command::Show { json } => {
            session.load().await;
            match session.scoreboard() {
                Some(board) if json => {
                    let out = serde_json::to_string_pretty(&board)
                        .map_err(|e| AppError::internal(format!("failed to render scoreboard: {e}")))?;
                    println!("{out}");
                }
                Some(board) => print!("{}", render_scoreboard(&board)),
                None => println!("No match in progress"),
            }
        }
        Command::Reset => {
            session.load().await;
            session.reset().await?;
            println!("Match reset");
        }
        Command::Play => play(session).await?,
    }
    Ok(())
}

async fn play(session: &mut MatchSession) -> Result<(), AppError> {
    session.load().await;
    print_board(session);
    println!("Enter a turn total (add `d` for a double finish), `show`, `reset` or `quit`.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut remote = session.subscribe();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.map_err(|e| AppError::internal(format!("failed to read input: {e}")))?;
                let Some(line) = line else { break };
                match line.trim() {
                    "quit" | "exit" => break,
                    "show" => print_board(session),
                    "reset" => {
                        session.reset().await?;
                        remote = None;
                        println!("Match reset");
                    }
                    input => match session.submit(input).await {
                        Ok(outcome) => {
                            println!("{}", outcome.message());
                            print_board(session);
                        }
                        Err(e) if e.is_validation() => println!("{}", e.detail()),
                        Err(e) => return Err(e),
                    },
                }
            }
            Some(transition) = next_remote(&mut remote) => {
                println!("{}", describe(&transition));
                print_board(session);
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

async fn next_remote(
    rx: &mut Option<broadcast::Receiver<MatchTransition>>,
) -> Option<MatchTransition> {
    let Some(receiver) = rx.as_mut() else {
        return std::future::pending().await;
    };
    loop {
        match receiver.recv().await {
            Ok(transition) => return Some(transition),
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => {
                *rx = None;
                return None;
            }
        }
    }
}

fn describe(transition: &MatchTransition) -> String {
    match transition {
        MatchTransition::MatchStarted => "A new shared match started".to_string(),
        MatchTransition::TurnBecame { player_id } => format!("Player {} is up", player_id + 1),
        MatchTransition::MatchEnded { winner_name } => format!("{winner_name} wins!"),
        MatchTransition::MatchCleared => "The shared match was cleared".to_string(),
    }
}

fn print_board(session: &MatchSession) {
    match session.scoreboard() {
        Some(board) => print!("{}", render_scoreboard(&board)),
        None => println!("No match in progress"),
    }
}
