use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use toonduck::{
    DescriptionParser, MotionRequest, MotionStyle, PartLocator, Pipeline, PipelineConfig,
    StylizeMode, load_image, process_batch,
};

#[derive(Parser, Debug)]
#[command(name = "toonduck", version, about = "Animate a duckling photo into a cartoon GIF")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one or more images to animated GIFs.
    Animate(AnimateArgs),
    /// Print the detected part layout as JSON.
    Detect(DetectArgs),
    /// Print how a description is split into actions.
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct AnimateArgs {
    /// Input image file(s).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output GIF, or a directory when several inputs are given.
    #[arg(short, long)]
    output: PathBuf,

    /// Part-based motion family. Part animations without it run realistic.
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,

    /// bounce, rotate, scale, wobble, walk, jump, fly, idle, excited, roll or blink.
    #[arg(short, long)]
    animation: Option<MotionRequest>,

    #[arg(short, long)]
    frames: Option<u32>,

    /// Frame duration in milliseconds.
    #[arg(short, long)]
    duration: Option<u32>,

    /// Loop count, 0 loops forever.
    #[arg(short, long = "loop")]
    loop_count: Option<u16>,

    /// Free-text actions ("walks then jumps"); overrides frames and duration.
    #[arg(long)]
    describe: Option<String>,

    #[arg(long)]
    no_comic_style: bool,

    /// Pencil-like uneven edges.
    #[arg(long)]
    sketch: bool,

    #[arg(short, long)]
    edge_thickness: Option<u32>,

    /// Color levels per channel for posterization.
    #[arg(short, long)]
    colors: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// JSON pipeline config; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DetectArgs {
    input: PathBuf,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ParseArgs {
    text: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Realistic,
    HandDrawn,
}

impl From<StyleChoice> for MotionStyle {
    fn from(c: StyleChoice) -> Self {
        match c {
            StyleChoice::Realistic => MotionStyle::Realistic,
            StyleChoice::HandDrawn => MotionStyle::HandDrawn,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Animate(args) => cmd_animate(args),
        Command::Detect(args) => cmd_detect(args),
        Command::Parse(args) => cmd_parse(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &AnimateArgs) -> anyhow::Result<PipelineConfig> {
    let mut cfg = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(style) = args.style {
        cfg.style = Some(style.into());
    }
    if let Some(animation) = args.animation {
        cfg.animation = animation;
    }
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    if let Some(ms) = args.duration {
        cfg.gif.frame_duration_ms = ms;
    }
    if let Some(n) = args.loop_count {
        cfg.gif.loop_count = n;
    }
    if let Some(text) = &args.describe {
        cfg.description = Some(text.clone());
    }
    if args.no_comic_style {
        cfg.comic_style = false;
    }
    if args.sketch {
        cfg.comic.mode = StylizeMode::Sketch;
    }
    if let Some(t) = args.edge_thickness {
        cfg.comic.edge_thickness = t;
    }
    if let Some(c) = args.colors {
        cfg.comic.color_levels = c;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    Ok(cfg)
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    for input in &args.inputs {
        if !input.is_file() {
            anyhow::bail!("input file not found: {}", input.display());
        }
    }
    let pipeline = Pipeline::new(build_config(&args)?)?;

    if let [input] = args.inputs.as_slice() {
        let written = pipeline.process(input, &args.output)?;
        println!("{}", written.display());
        return Ok(());
    }

    let report = process_batch(&pipeline, &args.inputs, &args.output)?;
    for path in &report.written {
        println!("{}", path.display());
    }
    if report.written.is_empty() {
        anyhow::bail!("every input failed");
    }
    Ok(())
}

fn cmd_detect(args: DetectArgs) -> anyhow::Result<()> {
    let image = load_image(&args.input)?;
    let layout = PartLocator::default().locate(&image);
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    emit(&json, args.out.as_deref())
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let script = DescriptionParser::new().parse(&args.text);
    let json = serde_json::to_string_pretty(&serde_json::json!({
        "description": script.description,
        "segments": script.segments,
        "total_weight": script.total_weight(),
        "suggested_frames": script.suggested_frames(),
        "suggested_frame_duration_ms": script.suggested_frame_duration_ms(),
    }))
    .context("serialize script")?;
    emit(&json, None)
}

fn emit(json: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            toonduck::encode::ensure_parent_dir(path)?;
            std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
