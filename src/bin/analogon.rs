use std::path::{Path, PathBuf};

use analogon::{CombinationKey, GeneratorConfig, RotationAngle, ShapeId, TaskGenerator, TaskSpec};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "analogon", version, about = "Rotation visual-analogy puzzle generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset of unique puzzles.
    Generate(GenerateArgs),
    /// Render one explicit puzzle.
    Preview(PreviewArgs),
    /// List the shape catalog.
    Shapes,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory; one sub-directory per task.
    #[arg(long)]
    out: PathBuf,

    /// Number of puzzles.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for sampling and prompt choice.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip ground-truth videos.
    #[arg(long)]
    no_video: bool,

    /// Render puzzles on the rayon pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[arg(long)]
    shape_a: ShapeId,

    #[arg(long)]
    shape_c: ShapeId,

    /// Rotation in degrees; must be one of 15, 22.5, ..., 352.5.
    #[arg(long)]
    angle: f64,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the ground-truth video.
    #[arg(long)]
    no_video: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Shapes => cmd_shapes(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    Ok(match path {
        Some(p) => GeneratorConfig::from_path(p)?,
        None => GeneratorConfig::default(),
    })
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_video {
        config.generate_videos = false;
    }

    let generator = TaskGenerator::new(config)?;
    let mut pairs = generator.generate_dataset(args.count, args.parallel)?;
    for pair in &mut pairs {
        pair.write_to(&args.out.join(&pair.task_id))?;
    }

    let videos = pairs.iter().filter(|p| p.ground_truth_video.is_some()).count();
    eprintln!(
        "wrote {} tasks ({} with video) to {}",
        pairs.len(),
        videos,
        args.out.display()
    );
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_video {
        config.generate_videos = false;
    }

    let angle = RotationAngle::from_degrees(args.angle)?;
    let task = TaskSpec::rotation(CombinationKey::new(args.shape_a, args.shape_c, angle)?);
    let task_id = format!("{}_preview", config.domain);

    let generator = TaskGenerator::new(config)?;
    let mut pair = generator.generate_for_task(&task_id, task)?;
    pair.write_to(&args.out)?;

    eprintln!("{}", pair.task.description());
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_shapes() -> anyhow::Result<()> {
    for shape in ShapeId::ALL {
        let kind = if shape.template().is_convex() {
            "convex"
        } else {
            "composite"
        };
        println!("{shape}\t{kind}");
    }
    Ok(())
}
