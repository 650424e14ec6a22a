mod app;
mod config;
mod input;
mod library;
mod lyrics;
mod player;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "refrain",
    version,
    about = "Terminal music player with synchronized lyrics",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Audio files to seed the library with.
    files: Vec<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui {
        /// Audio files to seed the library with.
        files: Vec<std::path::PathBuf>,
    },
    /// Parse an .lrc file and print its timed lines (headless).
    Lyrics { file: std::path::PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Lyrics { file }) => {
            if !library::is_lyrics_path(&file) {
                anyhow::bail!("not an .lrc file: {}", file.display());
            }
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            print_lines(&lyrics::parser::parse_lrc(&raw));
        }
        Some(Command::Tui { files }) => run_tui(cli.config, files).await?,
        None => run_tui(cli.config, cli.files).await?,
    }

    Ok(())
}

async fn run_tui(
    config_override: Option<std::path::PathBuf>,
    files: Vec<std::path::PathBuf>,
) -> anyhow::Result<()> {
    let cfg = config::load(config_override.as_deref()).context("load config")?;
    let cfg_path = match config_override {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
    let mut app = app::App::new(cfg, cfg_path, files)?;
    app.run(terminal.terminal_mut()).await
}

fn print_lines(lines: &[lyrics::LyricLine]) {
    for (i, l) in lines.iter().enumerate() {
        let minutes = (l.time / 60.0).floor() as u64;
        let seconds = l.time - minutes as f64 * 60.0;
        println!("{:03}. [{:02}:{:05.2}] {}", i + 1, minutes, seconds, l.text);
    }
    println!("{} timed line(s)", lines.len());
}
