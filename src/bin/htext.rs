use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use htext::{
    EngineConfig, FontRef, GlyphMeasure, HText, HeadlessHost, HeuristicMeasure, LayoutDirection,
    ParleyMeasure, RecordedFrame, RecordingSurface, StyleSnapshot,
};

#[derive(Parser, Debug)]
#[command(name = "htext", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print per-character advance widths as a JSON array.
    Measure(MeasureArgs),
    /// Record the glyph draws of a transition as JSON frames.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Text to measure.
    #[arg(long)]
    text: String,

    /// Font file (TTF/OTF). Without it widths are estimated.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Text size in pixels.
    #[arg(long, default_value_t = 16.0)]
    size: f32,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Text shown before the transition.
    #[arg(long)]
    from: String,

    /// Text shown after the transition.
    #[arg(long)]
    to: String,

    /// Number of evenly spaced progress samples, endpoints included.
    #[arg(long, default_value_t = 10, conflicts_with = "fps")]
    frames: u32,

    /// Tick the ramp in real time at this rate instead of sampling progress.
    #[arg(long)]
    fps: Option<u32>,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file (TTF/OTF). Without it widths are estimated.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Text size in pixels.
    #[arg(long, default_value_t = 16.0)]
    size: f32,

    /// View width in pixels.
    #[arg(long, default_value_t = 480.0)]
    width: f32,

    /// Lay the text out right to left.
    #[arg(long)]
    rtl: bool,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Measure(args) => cmd_measure(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_font(path: &Path) -> anyhow::Result<FontRef> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(FontRef::from_bytes(bytes))
}

fn read_config(path: &Path) -> anyhow::Result<EngineConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    EngineConfig::from_json_str(&s).with_context(|| format!("load config '{}'", path.display()))
}

fn make_measure(font: Option<&Path>) -> anyhow::Result<(FontRef, Box<dyn GlyphMeasure>)> {
    match font {
        Some(path) => Ok((read_font(path)?, Box::new(ParleyMeasure::new()))),
        None => Ok((FontRef::Default, Box::new(HeuristicMeasure::default()))),
    }
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let (font, mut measure) = make_measure(args.font.as_deref())?;
    let style = StyleSnapshot {
        size: args.size,
        font,
        ..StyleSnapshot::default()
    };

    let widths = htext::measure_with(measure.as_mut(), &args.text, &style)
        .with_context(|| format!("measure '{}'", args.text))?;
    println!("{}", serde_json::to_string(&widths)?);
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => EngineConfig::default(),
    };
    let (font, measure) = make_measure(args.font.as_deref())?;

    let mut host = HeadlessHost::new(args.from.as_str(), args.size, args.width);
    host.font = font;
    if args.rtl {
        host.direction = LayoutDirection::Rtl;
    }

    let mut engine = HText::from_parts(host, config.variant.build(), measure, config.ease());
    engine.on_first_layout();
    engine.animate_text(args.to.as_str(), true);

    let frames = match args.fps {
        Some(fps) => tick_frames(&mut engine, fps)?,
        None => sample_frames(&mut engine, args.frames),
    };

    let json = serde_json::to_string_pretty(&frames).with_context(|| "serialize frames")?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {} frames to {}", frames.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").with_context(|| "write frames to stdout")?;
        }
    }
    Ok(())
}

fn record(engine: &HText<HeadlessHost>) -> RecordedFrame {
    let mut surface = RecordingSurface::new();
    engine.on_draw(&mut surface);
    RecordedFrame {
        progress: engine.progress(),
        glyphs: surface.take(),
    }
}

fn sample_frames(engine: &mut HText<HeadlessHost>, count: u32) -> Vec<RecordedFrame> {
    let count = count.max(1);
    (0..count)
        .map(|i| {
            let p = if count == 1 {
                1.0
            } else {
                i as f32 / (count - 1) as f32
            };
            engine.set_progress(p);
            record(engine)
        })
        .collect()
}

fn tick_frames(engine: &mut HText<HeadlessHost>, fps: u32) -> anyhow::Result<Vec<RecordedFrame>> {
    if fps == 0 {
        anyhow::bail!("fps must be > 0");
    }
    let dt = Duration::from_secs_f64(1.0 / f64::from(fps));

    let mut frames = vec![record(engine)];
    while engine.is_animating() {
        engine.tick(dt);
        frames.push(record(engine));
    }
    Ok(frames)
}
