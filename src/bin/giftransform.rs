use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use giftransform::{
    AnimatedSource, Content, CpuCanvas, FrameBuffer, GifAnimation, GifView, Rect, WidgetStyle,
};

#[derive(Parser, Debug)]
#[command(name = "giftransform", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the frames of a GIF playback pass as PNGs.
    Render(RenderArgs),
    /// Render a still image through the rounded or oval path.
    Still(StillArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Widget style JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output width in pixels (defaults to the GIF width).
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels (defaults to the GIF height).
    #[arg(long)]
    height: Option<u32>,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,
}

#[derive(Parser, Debug)]
struct StillArgs {
    /// Input image (PNG, JPEG, or the first frame of a GIF).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Widget style JSON.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Still(args) => cmd_still(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_style(path: Option<&Path>) -> anyhow::Result<WidgetStyle> {
    match path {
        Some(p) => {
            WidgetStyle::from_path(p).with_context(|| format!("load style '{}'", p.display()))
        }
        None => Ok(WidgetStyle::default()),
    }
}

fn without_playback(style: &WidgetStyle) -> WidgetStyle {
    WidgetStyle {
        loop_count: None,
        ..style.clone()
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = load_style(args.style.as_deref())?;
    let anim = GifAnimation::from_path(&args.in_path)
        .with_context(|| format!("decode gif '{}'", args.in_path.display()))?;
    let (gw, gh) = anim.frame_size();
    let frame_count = anim.frame_count();
    let (w, h) = (args.width.unwrap_or(gw), args.height.unwrap_or(gh));

    let mut view = GifView::new();
    view.set_bounds(Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

    if style.oval == Some(true) {
        view.apply_style(&without_playback(&style));
        view.set_oval(true, Content::animated(anim))?;
        let out = args.out_dir.join("frame_00000.png");
        write_frame(&mut view, w, h, &out)?;
        tracing::info!(path = %out.display(), "wrote oval still");
        return Ok(());
    }

    view.set_source(Content::animated(anim))?;
    view.apply_style(&style);
    view.set_gif_listener(|loop_number: u32| {
        tracing::info!(loop_number, "loop completed");
    });

    // Infinite playback renders one pass; finite playback renders until it stops.
    let pass_frames = match style.loop_count {
        Some(n) if n > 0 => frame_count.saturating_mul(usize::from(n)),
        _ => frame_count,
    };
    let limit = args.max_frames.map_or(pass_frames, |m| m.min(pass_frames));

    let mut written = 0usize;
    while written < limit {
        let out = args.out_dir.join(format!("frame_{written:05}.png"));
        write_frame(&mut view, w, h, &out)?;
        written += 1;

        let Some(Content::Animated(a)) = view.content() else {
            break;
        };
        // Advancing by the current delay always steps unless playback stopped or is a still.
        let delay = a.current_frame_delay();
        if !view.advance(delay) {
            break;
        }
    }

    tracing::info!(frames = written, dir = %args.out_dir.display(), "render finished");
    Ok(())
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let style = load_style(args.style.as_deref())?;
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let frame = FrameBuffer::decode(&bytes)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?;
    let (w, h) = frame.size();

    let mut view = GifView::new();
    view.set_bounds(Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
    view.apply_style(&without_playback(&style));
    view.set_oval(style.oval == Some(true), Content::Static(frame))?;

    write_frame(&mut view, w, h, &args.out)?;
    tracing::info!(path = %args.out.display(), "wrote still");
    Ok(())
}

fn write_frame(view: &mut GifView, w: u32, h: u32, out: &Path) -> anyhow::Result<()> {
    let mut canvas = CpuCanvas::new(w, h)?;
    view.draw(&mut canvas);
    canvas
        .finish()
        .save_png(out)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}
