// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use text_helper::config::{load_and_validate_config, AppConfig, SessionScript};
use text_helper::observability::init_tracing;
use text_helper::session::{Action, ActionKind, ActionOutcome, Field, Mode, SessionRegistry, UploadedFile};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const HELP: &str = "\
Commands (one per line):
  upload <path>          load a .txt file
  mode <read|append>     switch mode
  old <text>             set Replace -> Old
  new <text>             set Replace -> New
  needle <text>          set Count occurrences of
  extra <text>           set the text appended on save
  uppercase | lowercase | strip | replace | count | save
  view | json | help | quit";

struct Args {
    config: Option<PathBuf>,
    interactive: bool,
    target: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        interactive: false,
        target: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--interactive" | "-i" => args.interactive = true,
            other if other.starts_with("--") => bail!("unknown flag: {}", other),
            other => args.target = Some(PathBuf::from(other)),
        }
    }

    if !args.interactive && args.target.is_none() {
        let program = env::args().next().unwrap_or_else(|| "text-helper".to_string());
        eprintln!("Usage: {} [--config <settings.yaml>] <session.yaml>", program);
        eprintln!("       {} [--config <settings.yaml>] --interactive [file.txt]", program);
        eprintln!("Example: {} configs/demo-session.yaml", program);
        std::process::exit(1);
    }
    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AppConfig::default(),
    };
    init_tracing(&config.log_filter);

    if args.interactive {
        run_interactive(config, args.target.as_deref()).await
    } else {
        let script = args.target.context("missing session script")?;
        run_script(config, &script)
    }
}

/// Replay a recorded session and write the download, if any, to the working directory
fn run_script(config: AppConfig, script_path: &Path) -> Result<()> {
    let base_dir = script_path.parent().unwrap_or_else(|| Path::new("."));
    let script = SessionScript::load(script_path)?;
    let actions = script.into_actions(base_dir)?;

    println!("📝 Text Helper session replay");
    println!("═══════════════════════════════");
    println!("Script: {}", script_path.display());
    println!("Steps:  {}", actions.len());
    println!();

    let mut registry = SessionRegistry::new(config);
    let id = registry.open();

    for action in actions {
        let name = action.name();
        let outcome = registry
            .dispatch(id, action)
            .context("session closed during replay")?;
        match &outcome.status {
            Some(status) => println!("  {:<10} {}", name, status),
            None => println!("  {:<10} ok", name),
        }
        write_artifact(&outcome)?;
    }

    let view = registry.view(id).context("session closed during replay")?;
    println!("\n{}", "─".repeat(60));
    print!("{}", view);
    Ok(())
}

/// Line-driven front end: each input line is one UI event, handled to completion
async fn run_interactive(config: AppConfig, initial_file: Option<&Path>) -> Result<()> {
    let mut registry = SessionRegistry::new(config);
    let id = registry.open();
    let mut stdout = tokio::io::stdout();

    println!("📝 Text Helper (type 'help' for commands)");

    if let Some(path) = initial_file {
        let file = UploadedFile::from_path(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let outcome = registry.dispatch(id, Action::Upload(file));
        if let Some(outcome) = &outcome {
            write_artifact(outcome)?;
        }
    }
    if let Some(view) = registry.view(id) {
        print!("{}", view);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim_end();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        let action = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "view" => {
                if let Some(view) = registry.view(id) {
                    print!("{}", view);
                }
                continue;
            }
            "json" => {
                if let Some(view) = registry.view(id) {
                    println!("{}", view.to_json()?);
                }
                continue;
            }
            "upload" => match UploadedFile::from_path(rest) {
                Ok(file) => Action::Upload(file),
                Err(e) => {
                    println!("❌ Could not read '{}': {}", rest, e);
                    continue;
                }
            },
            "mode" => match rest.parse::<Mode>() {
                Ok(mode) => Action::SetMode(mode),
                Err(e) => {
                    println!("❌ {}", e);
                    continue;
                }
            },
            "old" => Action::SetField(Field::ReplaceOld, rest.to_string()),
            "new" => Action::SetField(Field::ReplaceNew, rest.to_string()),
            "needle" => Action::SetField(Field::CountSubstring, rest.to_string()),
            "extra" => Action::SetField(Field::AppendExtra, rest.replace("\\n", "\n")),
            other => match other.parse::<ActionKind>() {
                Ok(kind) => Action::Run(kind),
                Err(e) => {
                    println!("❌ {} (type 'help')", e);
                    continue;
                }
            },
        };

        let Some(outcome) = registry.dispatch(id, action) else {
            break;
        };
        write_artifact(&outcome)?;
        if let Some(view) = registry.view(id) {
            print!("{}", view);
        }
    }

    registry.close(id);
    println!("👋 Session ended.");
    Ok(())
}

fn write_artifact(outcome: &ActionOutcome) -> Result<()> {
    if let Some(artifact) = &outcome.artifact {
        let path = artifact
            .save_to(Path::new("."))
            .with_context(|| format!("writing {}", artifact.file_name))?;
        println!("💾 Saved {}", path.display());
    }
    Ok(())
}
