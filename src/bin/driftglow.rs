use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use driftglow::{Engine, EngineConfig, PixelSurface, Viewport};

#[derive(Parser, Debug)]
#[command(name = "driftglow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of the background as a PNG.
    Frame(FrameArgs),
    /// Render a frame sequence as numbered PNGs.
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct CommonArgs {
    /// Engine config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Viewport height in pixels (the surface is taller per the config's
    /// height multiplier).
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Override the config's randomness seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Frame index (0-based); the engine ticks up to and including it.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Output directory for frame_NNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_config(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
            let r = BufReader::new(f);
            serde_json::from_reader(r).with_context(|| "parse config JSON")?
        }
        None => EngineConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

fn make_engine(common: &CommonArgs) -> anyhow::Result<(Engine, PixelSurface)> {
    let config = read_config(common.config.as_deref(), common.seed)?;
    let viewport = Viewport {
        width: common.width,
        height: common.height,
    };
    let engine = Engine::new(config, viewport)?;
    let surface = PixelSurface::new(engine.size())?;
    Ok((engine, surface))
}

fn write_png(surface: &PixelSurface, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &surface.to_straight_rgba(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut engine, mut surface) = make_engine(&args.common)?;

    for frame in 0..=args.frame {
        engine.tick(engine.frame_timestamp(frame), &mut surface);
    }
    write_png(&surface, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }
    let (mut engine, mut surface) = make_engine(&args.common)?;

    for frame in 0..args.frames {
        engine.tick(engine.frame_timestamp(frame), &mut surface);
        let out = args.out_dir.join(format!("frame_{frame:04}.png"));
        write_png(&surface, &out)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}
