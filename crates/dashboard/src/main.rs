use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ratings_core::Config;
use ratings_dashboard::logging::{init_tracing, DEFAULT_FILTER};
use ratings_dashboard::{Command, DashboardSession, JsonRenderer, Renderer, TextRenderer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "movie-ratings", version, about = "Movie ratings analysis dashboard")]
struct Cli {
    /// Ratings CSV (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum number of ratings per genre
    #[arg(long)]
    min_genre_ratings: Option<u32>,

    /// Minimum number of ratings per movie
    #[arg(long)]
    min_movie_ratings: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Read threshold commands from stdin and re-render after each one
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(data) = &cli.data {
        config.data.path = data.to_string_lossy().into_owned();
    }
    Ok(config)
}

fn render(session: &DashboardSession, renderer: &dyn Renderer) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer
        .render(&session.dashboard(), &mut out)
        .context("writing dashboard")?;
    out.flush()?;
    Ok(())
}

fn run_interactive(session: &mut DashboardSession, renderer: &dyn Renderer) -> Result<()> {
    eprintln!("{}", Command::USAGE);
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                eprintln!("{}", Command::USAGE);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => eprintln!("{}", Command::USAGE),
            Command::Show => render(session, renderer)?,
            other => {
                session.apply(other);
                render(session, renderer)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing(DEFAULT_FILTER)?;
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let data_path = config.data.path.clone();
    let mut session = DashboardSession::open(config)
        .with_context(|| format!("loading ratings from {data_path}"))?;

    if let Some(n) = cli.min_genre_ratings {
        session.set_genre_threshold(n);
    }
    if let Some(n) = cli.min_movie_ratings {
        session.set_movie_threshold(n);
    }
    info!(thresholds = ?session.thresholds(), "starting dashboard");

    let renderer: Box<dyn Renderer> = match cli.format {
        Format::Text => Box::new(TextRenderer::default()),
        Format::Json => Box::new(JsonRenderer),
    };

    render(&session, renderer.as_ref())?;
    if cli.interactive {
        run_interactive(&mut session, renderer.as_ref())?;
    }
    Ok(())
}
