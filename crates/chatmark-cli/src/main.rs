use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::MessageRenderer;
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Pretty-printed JSON document
    Json,
    /// Indented plain-text outline
    #[default]
    Outline,
}

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Render a chat message into a structured document")]
struct Cli {
    /// Message file to render (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/chatmark/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn read_message(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read message from '{}'", path.display())),
        None => {
            let mut message = String::new();
            io::stdin()
                .read_to_string(&mut message)
                .context("Failed to read message from stdin")?;
            Ok(message)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let renderer = MessageRenderer::new(&config).context("Invalid employment vocabulary")?;
    let message = read_message(cli.input.as_deref())?;

    let doc = renderer.render(&message);
    log::debug!("rendered {} top-level blocks", doc.blocks.len());

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
        Format::Outline => print!("{doc}"),
    }

    Ok(())
}
