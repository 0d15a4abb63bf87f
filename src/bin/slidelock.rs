use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slidelock", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script and print one JSON trace entry per line.
    Simulate(SimulateArgs),
    /// Replay a gesture script and print the control snapshot as JSON.
    View(AtArgs),
    /// Replay a gesture script and render the control as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct ScriptArgs {
    /// Gesture script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Control config JSON; replaces the script's own config.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Stop the clock at this time instead of draining pending timers.
    #[arg(long)]
    until: Option<u64>,
}

#[derive(Args, Debug)]
struct AtArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Snapshot time in milliseconds.
    #[arg(long)]
    at: u64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    at: AtArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Margin around the track in pixels.
    #[arg(long, default_value_t = 8)]
    padding: u32,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::View(args) => cmd_view(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_script(args: &ScriptArgs) -> anyhow::Result<slidelock::Script> {
    let mut script = slidelock::Script::from_json_str(&read_to_string(&args.script)?)
        .with_context(|| format!("parse script '{}'", args.script.display()))?;
    if let Some(path) = &args.config {
        script.config = slidelock::ControlConfig::from_json_str(&read_to_string(path)?)
            .with_context(|| format!("parse config '{}'", path.display()))?;
    }
    Ok(script)
}

fn read_to_string(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn snapshot_at(args: &AtArgs) -> anyhow::Result<slidelock::ControlView> {
    let script = read_script(&args.script)?;
    let replay = slidelock::replay(&script, Some(slidelock::TimeMs(args.at)))?;
    replay
        .session
        .view()
        .with_context(|| format!("control is unmounted at {} ms", args.at))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let script = read_script(&args.script)?;
    let replay = slidelock::replay(&script, args.until.map(slidelock::TimeMs))?;
    for entry in &replay.trace {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

fn cmd_view(args: AtArgs) -> anyhow::Result<()> {
    let view = snapshot_at(&args)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let view = snapshot_at(&args.at)?;
    let settings = slidelock::RenderSettings {
        padding_px: args.padding,
        ..slidelock::RenderSettings::default()
    };
    let frame = slidelock::render_view(&view, &settings)?;
    slidelock::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
