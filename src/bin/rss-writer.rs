use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rss-writer", version)]
struct Cli {
    /// Log assembly and rendering at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a feed description to RSS XML.
    Render(RenderArgs),
    /// Validate a feed description without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input feed JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output XML path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input feed JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_feed_json(path: &Path) -> anyhow::Result<rss_writer::FeedSpec> {
    let f = File::open(path).with_context(|| format!("open feed '{}'", path.display()))?;
    let feed = rss_writer::FeedSpec::from_reader(BufReader::new(f))
        .with_context(|| format!("parse feed JSON '{}'", path.display()))?;
    Ok(feed)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let feed = read_feed_json(&args.in_path)?;
    let channel = rss_writer::Channel::from_feed(&feed)?;
    let xml = channel.render();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &xml).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(xml.as_bytes()).context("write stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let feed = read_feed_json(&args.in_path)?;
    let channel = rss_writer::Channel::from_feed(&feed)?;
    eprintln!("ok ({} items)", channel.items().len());
    Ok(())
}
