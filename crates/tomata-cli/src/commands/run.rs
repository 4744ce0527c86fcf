use std::path::PathBuf;

use clap::Args;
use tokio::sync::mpsc;
use tomata_core::{Command, SessionConfig, SessionRunner, SessionScheduler};

use crate::term::TermDisplay;

#[derive(Args)]
pub struct RunArgs {
    /// Pomodoro target for this session (pre-fills the target input)
    #[arg(long)]
    target: Option<u32>,
    /// Config file path (defaults to ~/.config/tomata/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the work interval length in minutes
    #[arg(long)]
    work_min: Option<u64>,
    /// Override the short break length in minutes
    #[arg(long)]
    short_break_min: Option<u64>,
    /// Override the long break length in minutes
    #[arg(long)]
    long_break_min: Option<u64>,
    /// Begin the first work interval immediately
    #[arg(long)]
    autostart: bool,
    /// Emit directives as JSON lines instead of human-readable output
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::load_default()?,
    };
    if let Some(minutes) = args.work_min {
        config.work_min = minutes;
    }
    if let Some(minutes) = args.short_break_min {
        config.short_break_min = minutes;
    }
    if let Some(minutes) = args.long_break_min {
        config.long_break_min = minutes;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_session(args, config))
}

async fn run_session(args: RunArgs, config: SessionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut scheduler = SessionScheduler::new(config);
    if let Some(target) = args.target {
        scheduler.set_target_input(target.to_string());
    }

    let (tx, rx) = mpsc::channel(16);
    let runner = SessionRunner::new(scheduler, TermDisplay::new(args.json), rx);
    let runner_task = tokio::spawn(runner.run());

    if !args.json {
        println!("Commands: start | stop | next | reset | target N | quit");
    }
    if args.autostart {
        let _ = tx.send(Command::Start).await;
    }

    // Stdin is read on a plain thread; commands cross into the runner via
    // the channel. EOF lets a session in flight run itself out.
    let input = std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_command(trimmed) {
                Some(command) => {
                    let quitting = command == Command::Shutdown;
                    if tx.blocking_send(command).is_err() || quitting {
                        break;
                    }
                }
                None => eprintln!("unknown command: {trimmed}"),
            }
        }
    });

    let runner = runner_task.await?;
    let _ = input.join();

    if !args.json {
        let snapshot = runner.scheduler().snapshot();
        println!(
            "\nCompleted {} of {} pomodoros.",
            snapshot.completed,
            snapshot.target.unwrap_or(0)
        );
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "start" => Some(Command::Start),
        "stop" => Some(Command::Stop),
        "next" => Some(Command::Next),
        "reset" => Some(Command::Reset),
        "target" => parts.next().map(|t| Command::SetTargetInput(t.to_string())),
        "quit" | "exit" => Some(Command::Shutdown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("start"), Some(Command::Start));
        assert_eq!(parse_command("stop"), Some(Command::Stop));
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("quit"), Some(Command::Shutdown));
        assert_eq!(parse_command("exit"), Some(Command::Shutdown));
    }

    #[test]
    fn parses_target_with_argument() {
        assert_eq!(
            parse_command("target 6"),
            Some(Command::SetTargetInput("6".to_string()))
        );
        assert_eq!(parse_command("target"), None);
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(parse_command("pause"), None);
        assert_eq!(parse_command(""), None);
    }
}
