use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use gifsheet::{Frame, LayoutConfig, SheetMode, adapt_animation, build_sheet, remove_frame};

#[derive(Parser, Debug)]
#[command(name = "gifsheet", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a spritesheet PNG plus a frame atlas JSON from an animated GIF.
    Sheet(SheetArgs),
    /// Print decoded frame metadata for an animated GIF as JSON.
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Input animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output spritesheet PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output atlas JSON path. Defaults to the PNG path with `.json`.
    #[arg(long)]
    atlas: Option<PathBuf>,

    /// Frame arrangement.
    #[arg(long, value_enum, default_value_t = ModeArg::Horizontal)]
    mode: ModeArg,

    /// Gap between adjacent cells in pixels, both axes.
    #[arg(long, default_value_t = 0)]
    padding: u32,

    /// Grid column count (grid mode only; auto when omitted).
    #[arg(long)]
    columns: Option<u32>,

    /// Comma-separated frame ordinals to drop before layout.
    #[arg(long, value_delimiter = ',')]
    drop_frames: Vec<usize>,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Input animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Horizontal,
    Vertical,
    Grid,
}

impl From<ModeArg> for SheetMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Horizontal => SheetMode::Horizontal,
            ModeArg::Vertical => SheetMode::Vertical,
            ModeArg::Grid => SheetMode::Grid,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sheet(args) => cmd_sheet(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn decode_frames(path: &Path) -> anyhow::Result<Vec<Frame>> {
    let file = File::open(path).with_context(|| format!("open gif '{}'", path.display()))?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .with_context(|| format!("read gif header '{}'", path.display()))?;
    let frames = adapt_animation(decoder.into_frames())?;
    Ok(frames)
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let mut frames = decode_frames(&args.in_path)?;

    // Drop in descending ordinal order so earlier removals don't shift the
    // positions of later ones.
    let mut drops = args.drop_frames.clone();
    drops.sort_unstable();
    drops.dedup();
    for ordinal in drops.into_iter().rev() {
        if remove_frame(&mut frames, ordinal).is_none() {
            anyhow::bail!(
                "--drop-frames ordinal {ordinal} is out of range (decoded {} frames)",
                frames.len()
            );
        }
    }

    let config = LayoutConfig {
        mode: args.mode.into(),
        padding: args.padding,
        columns: args.columns.map(|c| c.max(1)),
    };
    let sheet = build_sheet(&frames, &config)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    sheet.write_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());

    let atlas_path = args
        .atlas
        .unwrap_or_else(|| args.out.with_extension("json"));
    let image_name = args
        .out
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet.png".to_string());
    let json = sheet.atlas(&image_name).to_json()?;
    std::fs::write(&atlas_path, json)
        .with_context(|| format!("write atlas '{}'", atlas_path.display()))?;
    eprintln!("wrote {}", atlas_path.display());

    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let frames = decode_frames(&args.in_path)?;
    let value = serde_json::json!({
        "source": args.in_path.display().to_string(),
        "frame_count": frames.len(),
        "frames": frames
            .iter()
            .map(|f| serde_json::json!({
                "index": f.index,
                "w": f.width,
                "h": f.height,
                "offset_left": f.offset_left,
                "offset_top": f.offset_top,
                "duration_ms": f.duration_ms,
            }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
