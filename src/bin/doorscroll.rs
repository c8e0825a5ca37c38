use std::{
    path::{Path, PathBuf},
    sync::mpsc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use doorscroll::{
    CompositeSurface, DisplayMode, FrameSet, LoopingVideo, ProgressSource, SceneConfig,
    ScrollEvent, ScrollListener, TickOutcome, start_muted_autoplay,
};

#[derive(Parser, Debug)]
#[command(name = "doorscroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the view at one scroll progress as a PNG.
    Frame(FrameArgs),
    /// Simulate a scroll through the whole region, writing one PNG per tick.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Number of scroll steps from the region start to just past its end.
    #[arg(long, default_value_t = 120)]
    steps: u32,

    /// Extra ticks after the last scroll step, letting scrub lag settle.
    #[arg(long, default_value_t = 60)]
    settle_ticks: u32,

    /// Simulated time between ticks, in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Output directory for numbered PNGs.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

struct LoadedScene {
    config: SceneConfig,
    frames: FrameSet,
    video: LoopingVideo,
}

fn load_scene(path: &Path) -> anyhow::Result<LoadedScene> {
    let config = SceneConfig::from_path(path)?;
    config
        .validate()
        .with_context(|| format!("validate scene '{}'", path.display()))?;

    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let frames = config.load_frames(root)?;
    let report = frames.report();
    if !report.failed.is_empty() {
        tracing::warn!(
            loaded = report.loaded,
            failed = report.failed.len(),
            "some door frames failed to load"
        );
    }

    let mut video = config.load_video(root)?;
    if config.video.autoplay_muted {
        start_muted_autoplay(&mut video);
    }

    Ok(LoadedScene {
        config,
        frames,
        video,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let LoadedScene {
        config,
        frames,
        video,
    } = load_scene(&args.config)?;

    let mut player = config.player()?;
    player.set_progress(args.progress);

    let mut surface = CompositeSurface::new(config.canvas)?;
    let drawn = match player.render_tick(0.0, &frames, &video, &mut surface) {
        TickOutcome::Drawn => true,
        TickOutcome::SkippedFullscreen => player.present_fullscreen(&video, &mut surface),
        TickOutcome::NotReady => false,
    };
    if !drawn {
        anyhow::bail!(
            "nothing to draw at progress {}: frame {} or video not available",
            args.progress,
            player.params().frame_index
        );
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Listener that forwards timeline events into a channel.
fn channel_listener(tx: mpsc::Sender<ScrollEvent>) -> ScrollListener {
    Box::new(move |ev| {
        if tx.send(ev).is_err() {
            tracing::trace!(?ev, "scroll event dropped, receiver gone");
        }
    })
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be >= 1");
    }
    let LoadedScene {
        config,
        frames,
        mut video,
    } = load_scene(&args.config)?;

    let mut timeline = config.timeline()?;
    let (tx, rx) = mpsc::channel();
    timeline.subscribe(channel_listener(tx));

    let mut player = config.player()?;
    let mut surface = CompositeSurface::new(config.canvas)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let dt = args.tick_ms as f64 / 1000.0;
    let start = config.scroll.start;
    // Overshoot the end slightly so the region is left and the boundary fires.
    let span = (config.scroll.end - config.scroll.start) * 1.05;

    let mut written = 0u32;
    let mut skipped = 0u32;
    for tick in 0..(args.steps + args.settle_ticks) {
        if tick <= args.steps {
            timeline.set_scroll(start + span * f64::from(tick) / f64::from(args.steps));
        }
        timeline.tick(dt);
        for ev in rx.try_iter() {
            player.handle(ev);
        }
        video.advance(dt);

        let drawn = match player.render_tick(dt, &frames, &video, &mut surface) {
            TickOutcome::Drawn => true,
            TickOutcome::SkippedFullscreen => player.present_fullscreen(&video, &mut surface),
            TickOutcome::NotReady => false,
        };
        if !drawn {
            skipped += 1;
            continue;
        }

        let out = args.out_dir.join(format!("tick_{tick:05}.png"));
        surface.save_png(&out)?;
        written += 1;
        tracing::debug!(
            tick,
            progress = timeline.progress(),
            fullscreen = player.mode() == DisplayMode::Fullscreen,
            "tick written"
        );
    }

    eprintln!(
        "wrote {written} frames to {} ({skipped} ticks had nothing to draw)",
        args.out_dir.display()
    );
    Ok(())
}
