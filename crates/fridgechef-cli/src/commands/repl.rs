//! Line-based stand-in for the voice channel.
//!
//! Plain lines go through the same classification path as transcribed
//! speech; slash commands reach the chat-side features.

use super::render;
use crate::bootstrap::Runtime;
use anyhow::Result;
use colored::Colorize;
use fridgechef_application::SessionStore;
use fridgechef_core::cooking::StepPosition;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

const COMMANDS: [&str; 5] = ["/recommend", "/expiring", "/audio", "/status", "/help"];

/// REPL helper providing slash-command completion, hints and highlighting.
#[derive(Clone)]
struct CommandHelper;

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CommandHelper {}

/// One parsed REPL line.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Quit,
    Help,
    Status,
    Expiring,
    Recommend(&'a str),
    Audio(&'a str),
    Utterance(&'a str),
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Input::Quit;
    }
    if !line.starts_with('/') {
        return Input::Utterance(line);
    }

    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match command {
        "/help" => Input::Help,
        "/status" => Input::Status,
        "/expiring" => Input::Expiring,
        "/recommend" if !rest.is_empty() => Input::Recommend(rest),
        "/audio" if !rest.is_empty() => Input::Audio(rest),
        _ => Input::Unknown(command),
    }
}

fn print_help() {
    println!("{}", "Say what you would say while cooking, e.g. '김치찌개로 할게', '다음', '3분 타이머'.".bright_black());
    println!("{}", "  /recommend <text>  recommend recipes".bright_black());
    println!("{}", "  /expiring          ingredients about to expire".bright_black());
    println!("{}", "  /audio <file>      send a recorded utterance".bright_black());
    println!("{}", "  /status            current cooking session".bright_black());
    println!("{}", "  quit               exit".bright_black());
}

async fn print_status(runtime: &Runtime, user: &str) {
    match runtime.assistant.sessions.get(user).await {
        None => println!("{}", "No active cooking session.".bright_black()),
        Some(session) => {
            let position = match session.position() {
                StepPosition::AwaitingStart => "not started".to_string(),
                StepPosition::OnStep(index) => {
                    format!("step {}/{}", index + 1, session.steps().len())
                }
            };
            println!(
                "{}",
                format!("Cooking '{}' ({})", session.recipe_title, position).bright_black()
            );
        }
    }
}

async fn handle_line(runtime: &Runtime, user: &str, input: Input<'_>) -> Result<()> {
    let assistant = &runtime.assistant;
    match input {
        Input::Quit => {}
        Input::Help => print_help(),
        Input::Status => print_status(runtime, user).await,
        Input::Expiring => render::expiring(&assistant.inventory.expiring_soon(user).await?),
        Input::Recommend(text) => render::recommendation(
            &assistant
                .recommendations
                .recommend_from_text(user, text)
                .await?,
        ),
        Input::Audio(path) => {
            let audio = tokio::fs::read(path).await?;
            render::cooking_response(&assistant.voice.handle_audio(user, audio).await?);
        }
        Input::Utterance(text) => {
            render::cooking_response(&assistant.voice.handle_text(user, text).await?)
        }
        Input::Unknown(command) => {
            println!("{}", format!("Unknown command: {} (try /help)", command).yellow())
        }
    }
    Ok(())
}

pub async fn run(runtime: &Runtime, user: &str) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CommandHelper));

    println!("{}", "=== Fridgechef ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Cooking as '{}'. Idle sessions end after {:?}. Type /help for commands.",
            user,
            runtime.config.session_idle_timeout()
        )
        .bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let input = parse_input(&line);
                if input == Input::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if input == Input::Utterance("") {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                // Collaborator failures are reported and the loop carries on;
                // the session is unchanged by a failed command.
                if let Err(err) = handle_line(runtime, user, input).await {
                    eprintln!("{}", format!("Error: {:#}", err).red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
