mod app;
mod config;
mod export;
mod gemini;
mod i18n;
mod input;
mod palette;
mod session;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gemini::GeminiClient;
use i18n::Language;
use palette::{Palette, Stamp};
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Parser)]
#[command(name = "moodpal", version, about = "Mood to color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate one palette and print it (headless).
    Generate {
        /// Free-text mood description.
        mood: String,
        /// Output language: zh-TW, en, ja, ko. Defaults to the configured one.
        #[arg(long, value_parser = parse_language)]
        lang: Option<Language>,
        /// Also paint a mood image.
        #[arg(long)]
        image: bool,
        /// Subject keywords for the mood image.
        #[arg(long, requires = "image")]
        keywords: Option<String>,
        /// Write the mood-board PNG into this directory.
        #[arg(long)]
        export: Option<PathBuf>,
        /// Print the palette as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the curated palettes (headless).
    Trending {
        #[arg(long)]
        json: bool,
    },
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw).ok_or_else(|| {
        let known: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        format!("unknown language {raw:?}, expected one of {}", known.join(", "))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    let command = cli.command.unwrap_or(Command::Tui);
    init_logging(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let client = GeminiClient::from_env(&cfg.gemini).context("configure Gemini client")?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path, client);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate {
            mood,
            lang,
            image,
            keywords,
            export,
            json,
        } => {
            let client = GeminiClient::from_env(&cfg.gemini).context("configure Gemini client")?;
            let language = lang.unwrap_or(cfg.ui.language);
            let draft = client
                .generate_palette(&mood, language)
                .await
                .context("generate palette")?;
            let palette = Palette::from_draft(draft, Stamp::now());

            let mood_image = if image {
                let keywords = gemini::prompt::clean_keywords(keywords.as_deref());
                match client.generate_image(&palette, keywords.as_deref()).await {
                    Ok(img) => Some(img),
                    Err(e) => {
                        tracing::warn!("mood image failed: {e}");
                        eprintln!("{}", language.text().image_error);
                        None
                    }
                }
            } else {
                None
            };

            if json {
                let mut out = serde_json::to_value(&palette)?;
                if let (Some(obj), Some(img)) = (out.as_object_mut(), &mood_image) {
                    obj.insert("image".to_string(), img.data_uri().into());
                }
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_palette(&palette);
            }

            if let Some(dir) = export {
                let fonts = export::Typesetter::load(cfg.paths.font.as_deref());
                let path = export::export_png(&palette, mood_image.as_ref(), &dir, &fonts)
                    .context("export mood board")?;
                eprintln!("{}: {}", language.text().exported, path.display());
            }
        }
        Command::Trending { json } => {
            let palettes = palette::curated::popular();
            if json {
                println!("{}", serde_json::to_string_pretty(&palettes)?);
            } else {
                for p in &palettes {
                    print_palette(p);
                    println!();
                }
            }
        }
    }

    Ok(())
}

/// TUI mode owns the terminal, so logs go to a file under the data dir.
fn init_logging(cfg: &config::Config, tui_mode: bool) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log.level());

    if tui_mode {
        std::fs::create_dir_all(&cfg.paths.data_dir)
            .with_context(|| format!("create {}", cfg.paths.data_dir.display()))?;
        let path = cfg.paths.data_dir.join("moodpal.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn print_palette(p: &Palette) {
    println!("{}  ({})", p.name, p.id);
    println!("  {}", p.description);
    for (i, c) in p.colors.iter().enumerate() {
        println!("  {}. {}  {}", i + 1, c.hex, c.name);
    }
    println!("  {}", p.design_advice);
}
