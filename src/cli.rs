//! Line-oriented terminal chat window.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::error::Result;
use crate::faq::{FaqItem, default_faq, search_faq};
use crate::responder::{RuleTable, build_default_rule_table, load_rule_table};
use crate::session::{ChatDriver, Clock, Scheduler, Session, TokioScheduler};

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Transcript,
    Faq(&'a str),
    Suggestion(usize),
    Message(&'a str),
}

/// Parses a line. Numbers pick a suggestion only while the chips are on screen.
fn parse_command(line: &str, visible_suggestions: usize) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/sair" => return Command::Quit,
        "/transcript" => return Command::Transcript,
        _ => {}
    }
    if trimmed == "/faq" {
        return Command::Faq("");
    }
    if let Some(term) = trimmed.strip_prefix("/faq ") {
        return Command::Faq(term.trim());
    }
    if let Ok(choice) = trimmed.parse::<usize>()
        && (1..=visible_suggestions).contains(&choice)
    {
        return Command::Suggestion(choice - 1);
    }
    Command::Message(line)
}

fn build_rule_table(config: &Config) -> Result<RuleTable> {
    let table = match &config.rules_path {
        Some(path) => load_rule_table(path)?,
        None => {
            debug!("Using built-in rule table");
            build_default_rule_table()
        }
    };
    Ok(match config.match_mode {
        Some(mode) => table.with_match_mode(mode),
        None => table,
    })
}

fn print_suggestions(suggestions: &[String]) {
    println!("Sugestões:");
    for (idx, suggestion) in suggestions.iter().enumerate() {
        println!("  {}. {suggestion}", idx + 1);
    }
}

fn print_faq(items: &[&FaqItem], term: &str) {
    if items.is_empty() {
        println!("Nenhuma pergunta encontrada para \"{term}\"");
        return;
    }
    for item in items {
        println!("[{}] {}\n    {}", item.category, item.question, item.answer);
    }
}

/// Returns `false` once the user asked to leave.
async fn handle_line<C: Clock, S: Scheduler>(
    driver: &mut ChatDriver<C, S>,
    faq: &[FaqItem],
    line: &str,
) -> Result<bool> {
    let visible = if driver.session().is_suggestions_visible() {
        driver.session().suggestions().len()
    } else {
        0
    };

    let reply = match parse_command(line, visible) {
        Command::Quit => return Ok(false),
        Command::Transcript => {
            println!(
                "{}",
                serde_json::to_string_pretty(driver.session().transcript())?
            );
            return Ok(true);
        }
        Command::Faq(term) => {
            print_faq(&search_faq(faq, term), term);
            return Ok(true);
        }
        Command::Suggestion(idx) => {
            let suggestion = driver.session().suggestions()[idx].clone();
            println!("> {suggestion}");
            driver.choose_suggestion(&suggestion).await
        }
        Command::Message(text) => driver.send(text).await,
    };

    if let Some(turn) = reply {
        println!("Assistente: {}", turn.text());
    }
    Ok(true)
}

/// Run the interactive chat on stdin/stdout.
pub async fn run() -> Result<()> {
    info!("Initializing chat");
    let config = Config::from_env()?;
    let rules = Arc::new(build_rule_table(&config)?);
    let faq = default_faq();

    let session = Session::new(rules);
    let mut driver = ChatDriver::new(session, TokioScheduler, config.reply_delay);

    println!("Olá! Sou o assistente do dashboard. Como posso ajudar?");
    print_suggestions(driver.session().suggestions());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, shutting down...");
                break;
            }
        };
        let Some(line) = line else {
            debug!("stdin closed");
            break;
        };

        // The reply delay races ctrl-c too; a reply still pending is dropped.
        tokio::select! {
            keep_going = handle_line(&mut driver, &faq, &line) => {
                if !keep_going? {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, shutting down...");
                break;
            }
        }
    }

    let transcript = driver.session().transcript();
    if transcript.is_empty() {
        warn!("Chat closed without any messages");
    } else {
        info!("Chat closed after {} turns", transcript.len());
    }
    Ok(())
}
