use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use mazewalk::{
    AnimationConfig, MazeConfig, RenderConfig, SvgDocument, format_seed, generate_and_solve,
    parse_seed,
};

#[derive(Parser, Debug)]
#[command(name = "mazewalk", version, about)]
struct Cli {
    /// Maze width in cells (odd, at least 3).
    #[arg(long, default_value_t = 63)]
    width: u16,

    /// Maze height in cells (odd, at least 3).
    #[arg(long, default_value_t = 63)]
    height: u16,

    /// Seed as up to 8 hex digits. A random seed is used when omitted.
    #[arg(long, value_parser = parse_seed)]
    seed: Option<u32>,

    /// Duration of each animation step, in microseconds.
    #[arg(long, default_value_t = 8100)]
    step_us: u64,

    /// Do not animate the solver's walk.
    #[arg(long)]
    no_walk: bool,

    /// Do not animate the final solution highlight.
    #[arg(long)]
    no_final: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file with SVG render settings; missing fields keep their defaults.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Prefix for SVG tile ids.
    #[arg(long)]
    id_prefix: Option<String>,

    /// Print the solved maze to the terminal (stderr).
    #[arg(long)]
    preview: bool,

    /// Maximum log level.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

fn init_tracing(level: Level, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(Some(guard))
}

fn load_render_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut config = match &cli.style {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read style file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse style file {}", path.display()))?
        }
        None => RenderConfig::default(),
    };
    if let Some(prefix) = &cli.id_prefix {
        config.id_prefix = prefix.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_level, cli.log_file.as_deref())?;

    let seed = cli.seed.unwrap_or_else(rand::random::<u32>);
    let config = MazeConfig::new(cli.width, cli.height, seed)?;
    let animation = AnimationConfig {
        step: Duration::from_micros(cli.step_us),
        animate_walk: !cli.no_walk,
        animate_final: !cli.no_final,
    };
    let render = load_render_config(&cli)?;

    let solved = generate_and_solve(&config, &animation)?;

    let document = match cli.format {
        Format::Svg => SvgDocument::new(&solved.timeline, &render).to_string(),
        Format::Json => solved.timeline.to_json().context("serialize timeline")?,
    };
    match &cli.out {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    if cli.preview {
        solved.maze.grid().display(&mut std::io::stderr())?;
    }
    eprintln!(
        "seed {} | {}x{} | path {} cells | execution time {:?}",
        format_seed(seed),
        config.width,
        config.height,
        solved.path.len(),
        solved.elapsed
    );
    Ok(())
}
