use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use word_master::leaderboard::ScoreSubmission;
use word_master::{GameConfig, GameService};

/// Line-protocol driver for the game contracts. One command per line on
/// stdin, one JSON response per line on stdout:
///
/// ```text
/// TARGET <YYYY-MM-DD>
/// SCORE <guess> <target>
/// SUBMIT {"name": ..., "score": ..., "gamesPlayed": ..., "averageScore": ..., "dateString": ...}
/// LEADERBOARDS
/// EXIT
/// ```
#[derive(Parser)]
#[command(name = "word_master_sim")]
struct Cli {
    #[arg(short, long, env = "WORD_MASTER_CONFIG", default_value = "word_master.toml")]
    config: PathBuf,

    #[arg(short, long, env = "WORD_MASTER_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("word_master=info")),
        )
        .init();

    let cli = Cli::parse();
    let service = match start(cli) {
        Ok(service) => service,
        Err(e) => {
            error!("Startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serve(&service, io::stdin().lock(), &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> word_master::GameResult<GameService> {
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.paths.data_dir = dir;
    }
    GameService::from_config(config)
}

fn serve<R: BufRead, W: Write>(service: &GameService, input: R, out: &mut W) -> io::Result<()> {
    info!("Simulator ready");
    for line in input.lines() {
        let line = line?;
        debug!("<- {:?}", line);
        let (command, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        let response = match command {
            "TARGET" => reply(service.target_word(rest)),
            "SCORE" => {
                let mut words = rest.split_whitespace();
                let guess = words.next().unwrap_or("");
                let target = words.next().unwrap_or("");
                reply(service.score(guess, target))
            }
            "SUBMIT" => match serde_json::from_str::<ScoreSubmission>(rest) {
                Ok(submission) => match service.submit_score(&submission) {
                    Ok(ok) => json!(ok),
                    Err(e) => {
                        warn!("Rejected submission: {}", e);
                        json!({ "success": false, "error": e.to_string() })
                    }
                },
                Err(e) => json!({ "success": false, "error": format!("invalid submission: {}", e) }),
            },
            "LEADERBOARDS" => json!(service.leaderboards()),
            "EXIT" => break,
            "" => continue,
            other => json!({ "error": format!("unknown command '{}'", other) }),
        };

        debug!("-> {}", response);
        writeln!(out, "{}", response)?;
        out.flush()?;
    }
    info!("Simulator shutting down");
    Ok(())
}

fn reply<T: Serialize, E: std::fmt::Display>(result: Result<T, E>) -> serde_json::Value {
    match result {
        Ok(value) => json!(value),
        Err(e) => json!({ "error": e.to_string() }),
    }
}
