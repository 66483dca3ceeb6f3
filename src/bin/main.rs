use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::style::{Color, Stylize};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use word_master::core::types::GuessOutcome;
use word_master::daily::parse_date;
use word_master::{GameConfig, GameService, GameSession, SessionStatus};

#[derive(Parser)]
#[command(name = "word_master")]
#[command(about = "Guess the word of the day by meaning")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "WORD_MASTER_CONFIG", default_value = "word_master.toml")]
    config: PathBuf,

    /// Directory for the ledger, leaderboards and player files
    #[arg(short, long, env = "WORD_MASTER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Play this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<String>,

    /// Name used for stats and the leaderboard
    #[arg(short, long, default_value = "player")]
    player: String,

    /// Write the loaded vectors as a binary snapshot and exit
    #[arg(long)]
    write_snapshot: Option<PathBuf>,
}

/// What the screen is showing. Driven only by the session's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Playing,
    RevealingHint,
    Won,
    Lost,
    ShownSummary,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("word_master=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.paths.data_dir = dir;
    }
    let date: NaiveDate = match &cli.date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    println!("Word Master. Loading word vectors...");
    let service = GameService::from_config(config)?;
    if let Some(path) = &cli.write_snapshot {
        service.engine().save_vectors(path)?;
        println!("Vectors saved to '{}'", path.display());
        return Ok(());
    }

    let mut phase = Phase::Loading;
    let mut session: Option<GameSession> = None;

    loop {
        phase = match phase {
            Phase::Loading => {
                let loaded = service.start_session(&cli.player, date)?;
                let next = match loaded.status() {
                    SessionStatus::InProgress => Phase::Playing,
                    _ => {
                        println!("You already played {}. Here is how it went.", date);
                        Phase::ShownSummary
                    }
                };
                session = Some(loaded);
                next
            }
            Phase::Playing => {
                let Some(current) = session.as_mut() else { break };
                print_board(current);
                let Some(input) = read_line()? else { break };
                match input.as_str() {
                    ":quit" | "exit" => break,
                    ":hint" => Phase::RevealingHint,
                    "" => Phase::Playing,
                    guess => {
                        let outcome = service.play_guess(&cli.player, current, guess)?;
                        print_feedback(guess, &outcome);
                        match current.status() {
                            SessionStatus::Won => Phase::Won,
                            SessionStatus::Lost => Phase::Lost,
                            SessionStatus::InProgress => Phase::Playing,
                        }
                    }
                }
            }
            Phase::RevealingHint => {
                let Some(current) = session.as_mut() else { break };
                match service.reveal_hint(current) {
                    Ok(hint) => println!("{} {}", "Hint:".bold(), hint),
                    Err(e) => println!("{}", e.to_string().with(Color::DarkGrey)),
                }
                Phase::Playing
            }
            Phase::Won => {
                println!("\n{}", "You got it!".with(Color::Green).bold());
                Phase::ShownSummary
            }
            Phase::Lost => {
                if let Some(current) = &session {
                    println!("\nOut of guesses. The word was '{}'.", current.target().bold());
                }
                Phase::ShownSummary
            }
            Phase::ShownSummary => {
                if let Some(current) = &session {
                    print_summary(&service, &cli.player, current);
                }
                break;
            }
        };
    }
    Ok(())
}

fn read_line() -> std::io::Result<Option<String>> {
    print!("> ");
    stdout().flush()?;
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// `#rrggbb` to a terminal colour.
fn hex_color(hex: &str) -> Color {
    let rgb = hex.strip_prefix('#').and_then(|h| {
        let channel = |i: usize| h.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
        Some(Color::Rgb { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    });
    rgb.unwrap_or(Color::White)
}

fn print_board(session: &GameSession) {
    let state = session.state();
    println!();
    println!("Word Master #{}  {}", session.sequence_number(), session.date());
    println!("---------------------------------------------------------------");
    for (i, hint) in session.visible_hints().iter().enumerate() {
        println!("  Hint {}: {}", i + 1, hint);
    }
    println!(
        "Score: {}   Guesses left: {}   Hints left: {}",
        state.base_score,
        state.guesses_remaining,
        session.hints_left()
    );
    if session.warm_streak() > 1 {
        println!("Warm streak: {}", session.warm_streak());
    }
    println!("Type a guess, ':hint' for another hint, ':quit' to leave.");
}

fn print_feedback(guess: &str, outcome: &GuessOutcome) {
    let fb = outcome.feedback;
    let line = match outcome.score {
        Some(score) => format!("{} {}: {} ({})", fb.emoji_category.emoji(), guess, fb.message, score),
        None => format!("{} {}: {}", fb.emoji_category.emoji(), guess, fb.message),
    };
    println!("{}", line.with(hex_color(fb.color)));
}

fn print_summary(service: &GameService, player: &str, session: &GameSession) {
    let policy = service.policy();
    let breakdown = session.breakdown().unwrap_or_else(|| policy.breakdown(session.state()));
    println!("\nBase score:      {}", breakdown.base_score);
    println!("Hints deduction: {}", breakdown.hints_deduction);
    println!("{} {}", "Final score:    ".bold(), breakdown.final_score.to_string().bold());

    println!("\n{}\n", session.share_text(policy));

    let stats = service.player_stats(player);
    println!(
        "{}: {} games, {} total, {} average, best {}",
        player, stats.games_played, stats.total_score, stats.average_score, stats.high_score
    );

    let boards = service.leaderboards();
    println!("\nThis month:");
    for (i, entry) in boards.monthly.iter().enumerate() {
        println!("  {:>2}. {:<16} {:>8}", i + 1, entry.name, entry.total_score);
    }
    println!("Hall of fame:");
    if boards.hall_of_fame.is_empty() {
        println!("  (play {} games to qualify)", service.engine().config().leaderboard.min_games_for_hall_of_fame);
    }
    for (i, entry) in boards.hall_of_fame.iter().enumerate() {
        println!("  {:>2}. {:<16} {:>8.0} ({} games)", i + 1, entry.name, entry.average_score, entry.games_played);
    }
}
