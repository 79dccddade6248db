use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hierdraw", version)]
struct Cli {
    /// Render config JSON (viewport, background, threading, chunk size).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a Transforms2D preset as a PNG.
    Transforms(TransformsArgs),
    /// Render one frame of the hierarchy animation as a PNG.
    Hierarchy(HierarchyArgs),
    /// Render a range of hierarchy frames as numbered PNGs.
    Animate(AnimateArgs),
    /// Print the recorded draw calls of one frame as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct TransformsArgs {
    /// Preset index, 0 (none) through 9.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output size, `WxH` or `N`.
    #[arg(long)]
    size: Option<hierdraw::Viewport>,
}

#[derive(Parser, Debug)]
struct HierarchyArgs {
    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output size, `WxH` or `N`.
    #[arg(long)]
    size: Option<hierdraw::Viewport>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Frames to render, `A..B` (end exclusive).
    #[arg(long)]
    frames: hierdraw::FrameRange,

    /// Directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output size, `WxH` or `N`.
    #[arg(long)]
    size: Option<hierdraw::Viewport>,

    /// Render frames on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames rendered per batch before writing.
    #[arg(long)]
    chunk_size: Option<usize>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Scene to record.
    #[arg(long, value_enum)]
    scene: SceneChoice,

    /// Preset index for the transforms scene.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Frame index for the hierarchy scene.
    #[arg(long, default_value_t = 0)]
    frame: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    Transforms,
    Hierarchy,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Transforms(args) => cmd_transforms(args, &config),
        Command::Hierarchy(args) => cmd_hierarchy(args, &config),
        Command::Animate(args) => cmd_animate(args, &config),
        Command::Dump(args) => cmd_dump(args, &config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<hierdraw::RenderConfig> {
    match path {
        Some(p) => hierdraw::RenderConfig::load(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(hierdraw::RenderConfig::default()),
    }
}

fn opts_for(
    scene: &hierdraw::Scene,
    config: &hierdraw::RenderConfig,
    size: Option<hierdraw::Viewport>,
) -> hierdraw::RenderOpts {
    let mut opts = hierdraw::RenderOpts::from_config(scene, config);
    if let Some(size) = size {
        opts.viewport = size;
    }
    opts
}

fn cmd_transforms(args: TransformsArgs, config: &hierdraw::RenderConfig) -> anyhow::Result<()> {
    let scene = hierdraw::Scene::Transforms2D { index: args.index };
    let opts = opts_for(&scene, config, args.size);
    let frame = hierdraw::render_frame(&scene, hierdraw::FrameIndex(0), &opts)
        .with_context(|| format!("render transform preset {}", args.index))?;
    hierdraw::write_png(&frame, &args.out)?;

    eprintln!(
        "wrote {} ({})",
        args.out.display(),
        hierdraw::transforms2d::preset_label(args.index)?
    );
    Ok(())
}

fn cmd_hierarchy(args: HierarchyArgs, config: &hierdraw::RenderConfig) -> anyhow::Result<()> {
    let scene = hierdraw::Scene::Hierarchy;
    let opts = opts_for(&scene, config, args.size);
    let frame = hierdraw::render_frame(&scene, hierdraw::FrameIndex(args.frame), &opts)
        .with_context(|| format!("render hierarchy frame {}", args.frame))?;
    hierdraw::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs, config: &hierdraw::RenderConfig) -> anyhow::Result<()> {
    let scene = hierdraw::Scene::Hierarchy;
    let opts = opts_for(&scene, config, args.size);
    let mut threading = config.threading();
    threading.parallel |= args.parallel;
    if args.threads.is_some() {
        threading.threads = args.threads;
    }

    if let Some(n) = args.chunk_size {
        threading.chunk_size = n;
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let written = hierdraw::render_frames_to(&scene, args.frames, &opts, &threading, |f, frame| {
        let path = args.out_dir.join(hierdraw::sequence_file_name(f.0));
        hierdraw::write_png(&frame, &path)
    })
    .with_context(|| format!("render frames {:?}", args.frames))?;

    eprintln!("wrote {written} frame(s) to {}", args.out_dir.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs, config: &hierdraw::RenderConfig) -> anyhow::Result<()> {
    let (scene, frame) = match args.scene {
        SceneChoice::Transforms => (
            hierdraw::Scene::Transforms2D { index: args.index },
            hierdraw::FrameIndex(0),
        ),
        SceneChoice::Hierarchy => (hierdraw::Scene::Hierarchy, hierdraw::FrameIndex(args.frame)),
    };
    let opts = hierdraw::RenderOpts::from_config(&scene, config);
    let commands = hierdraw::record_frame(&scene, frame, &opts)?;

    let out = serde_json::json!({
        "scene": scene,
        "frame": frame.0,
        "viewport": opts.viewport,
        "commands": commands,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
