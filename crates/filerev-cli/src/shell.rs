//! Interactive command loop over one commit store

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use filerev_store::{CommitStore, FileStore, Revert};

use crate::output;

const HELP: &str = "\
Commands:
  init                     clear the commit history
  commit <file> [message]  snapshot the current content of <file>
  log [--json]             list all commits, oldest first
  show <hash>              full details of the newest commit with <hash>
  revert <file> <hash>     restore <file> to the state recorded under <hash>
  verify                   check every stored hash against its fields
  help                     show this message
  quit                     exit";

/// Runs the shell until `quit` or end of input.
///
/// Store errors are printed and the session continues; only I/O errors on
/// the shell's own input abort the loop.
pub fn run<F, R>(store: &mut CommitStore<F>, mut input: R, interactive: bool) -> Result<()>
where
    F: FileStore,
    R: BufRead,
{
    if interactive {
        println!("filerev — type 'help' for commands");
    }

    let mut stdout = std::io::stdout();
    loop {
        if interactive {
            print!("filerev> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else { continue };
        if cmd.starts_with('#') {
            continue;
        }

        match cmd {
            "init" => {
                store.initialize();
                println!("{} Repository initialized.", "✔".green());
            }

            "commit" => match parts.next() {
                Some(file) => {
                    let message = parts.collect::<Vec<_>>().join(" ");
                    match store.commit(file, &message) {
                        Ok(commit) => {
                            println!("{} Changes committed to '{}'", "✔".green(), file.bold());
                            println!("  {} {}", "Hash:".bright_yellow(), commit.hash);
                            println!("  {} {}", "Date:".bright_yellow(), commit.timestamp);
                        }
                        Err(e) => report(e),
                    }
                }
                None => usage("commit <file> [message]"),
            },

            "log" => {
                if parts.next() == Some("--json") {
                    println!("{}", serde_json::to_string_pretty(store.log())?);
                } else if store.is_empty() {
                    println!("No commits yet.");
                } else {
                    println!("{}", output::log_table(store.log()));
                }
            }

            "show" => match parts.next() {
                Some(hash) => match store.log().iter().rev().find(|c| c.hash == hash) {
                    Some(commit) => {
                        println!("  {}    {}", "Hash:".bright_yellow(), commit.hash);
                        println!("  {}    {}", "Date:".bright_yellow(), commit.timestamp);
                        println!("  {}    {}", "File:".bright_yellow(), commit.filename);
                        println!("  {} {}", "Message:".bright_yellow(), commit.message);
                        println!("{}", "─".repeat(40).bright_black());
                        println!("{}", commit.content);
                    }
                    None => println!("{} No commit {} in the log.", "✘".red(), hash),
                },
                None => usage("show <hash>"),
            },

            "revert" => match (parts.next(), parts.next()) {
                (Some(file), Some(hash)) => match store.revert(file, hash) {
                    Ok(Revert::Restored(commit)) => {
                        println!(
                            "{} File '{}' reverted to the state at commit {}.",
                            "✔".green(),
                            file.bold(),
                            commit.short_hash()
                        );
                    }
                    Ok(Revert::NotFound) => {
                        println!(
                            "{} No commit with hash '{}' found for file '{}'.",
                            "✘".red(),
                            hash,
                            file.bold()
                        );
                    }
                    Err(e) => report(e),
                },
                _ => usage("revert <file> <hash>"),
            },

            "verify" => {
                let bad = store.verify();
                if bad.is_empty() {
                    println!("{} All {} commits verified.", "✔".green(), store.len());
                } else {
                    for commit in bad {
                        println!("{} {} does not match its fields", "✘".red(), commit.hash);
                    }
                }
            }

            "help" => println!("{HELP}"),

            "quit" | "exit" => break,

            other => {
                println!("{} Unknown command '{}' (try 'help').", "✘".red(), other);
            }
        }
    }

    Ok(())
}

fn report(err: filerev_store::StoreError) {
    // {:#} prints the whole chain, including the io source.
    eprintln!("{} {:#}", "✘".red(), anyhow::Error::from(err));
}

fn usage(syntax: &str) {
    println!("{} Usage: {}", "✘".red(), syntax);
}
