use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spirograph::{
    Ease, Exporter, Fps, LoopMode, PRESETS, SceneConfig, TimelineSettings, VectorAnimation,
    find_preset,
};

#[derive(Parser, Debug)]
#[command(name = "spirograph", version, about = "Draw and export roulette curves")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export the finished drawing as SVG.
    Svg(SceneArgs),
    /// Export an SVG that animates the drawing with SMIL.
    AnimatedSvg(AnimatedSvgArgs),
    /// Export the finished drawing as PNG.
    Png(PngArgs),
    /// Export the drawing animation as an animated GIF.
    Gif(TimedArgs),
    /// Export the drawing animation as MP4 (requires `ffmpeg` on PATH).
    Mp4(TimedArgs),
    /// List the built-in presets.
    Presets,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene JSON. Invalid fields fall back to their defaults individually.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Built-in preset id, applied on top of `--scene`.
    #[arg(long)]
    preset: Option<String>,

    /// Directory exported files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct AnimationArgs {
    /// Seconds for one draw; defaults to the scene's duration.
    #[arg(long)]
    duration: Option<f64>,

    /// Easing such as `linear` or `power2.inOut`; defaults to the scene's easing.
    #[arg(long)]
    easing: Option<Ease>,

    /// `none`, `continue` or `pingpong`.
    #[arg(long = "loop")]
    loop_mode: Option<LoopMode>,
}

#[derive(Args, Debug)]
struct AnimatedSvgArgs {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    animation: AnimationArgs,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Width and height in pixels.
    #[arg(long, default_value_t = 800)]
    size: u32,
}

#[derive(Args, Debug)]
struct TimedArgs {
    #[command(flatten)]
    scene: SceneArgs,

    #[command(flatten)]
    animation: AnimationArgs,

    /// Width and height in pixels.
    #[arg(long, default_value_t = 600)]
    size: u32,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Keep the whole curve visible and only animate the wave effect.
    #[arg(long)]
    no_draw: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::AnimatedSvg(args) => cmd_animated_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Gif(args) => cmd_timed(args, Format::Gif),
        Command::Mp4(args) => cmd_timed(args, Format::Mp4),
        Command::Presets => {
            for p in &PRESETS {
                println!("{:<16} {:<16} {}", p.id, p.name, p.description);
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let scene = match &args.scene {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => SceneConfig::default(),
    };
    match &args.preset {
        Some(id) => {
            let preset = find_preset(id).with_context(|| {
                let known: Vec<&str> = PRESETS.iter().map(|p| p.id).collect();
                format!("unknown preset '{id}' (known: {})", known.join(", "))
            })?;
            Ok(preset.apply_to(scene))
        }
        None => Ok(scene),
    }
}

fn resolve_animation(scene: &SceneConfig, args: &AnimationArgs) -> (f64, Ease, Option<LoopMode>) {
    (
        args.duration.unwrap_or(scene.animation.duration_secs),
        args.easing.unwrap_or(scene.animation.easing),
        args.loop_mode,
    )
}

fn report(path: &Path) {
    eprintln!("wrote {}", path.display());
}

fn cmd_svg(args: SceneArgs) -> anyhow::Result<()> {
    let exporter = Exporter::new(load_scene(&args)?);
    report(&exporter.export_static(&args.out_dir)?);
    Ok(())
}

fn cmd_animated_svg(args: AnimatedSvgArgs) -> anyhow::Result<()> {
    let exporter = Exporter::new(load_scene(&args.scene)?);
    let (duration_secs, easing, loop_mode) = resolve_animation(exporter.scene(), &args.animation);
    let anim = VectorAnimation {
        duration_secs,
        easing,
        loop_mode: loop_mode.unwrap_or(exporter.scene().animation.loop_mode),
    };
    report(&exporter.export_animated_vector(&args.scene.out_dir, &anim)?);
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let exporter = Exporter::new(load_scene(&args.scene)?);
    report(&exporter.export_raster(&args.scene.out_dir, args.size)?);
    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum Format {
    Gif,
    Mp4,
}

fn cmd_timed(args: TimedArgs, format: Format) -> anyhow::Result<()> {
    let exporter = Exporter::new(load_scene(&args.scene)?);
    let (duration_secs, easing, loop_mode) = resolve_animation(exporter.scene(), &args.animation);
    let settings = TimelineSettings {
        duration_secs,
        easing,
        fps: Fps::integer(args.fps)?,
        // Frame exports draw once unless a loop is requested explicitly.
        loop_mode: loop_mode.unwrap_or(LoopMode::None),
        draw: !args.no_draw,
    };

    let out_dir = &args.scene.out_dir;
    let path = match format {
        Format::Gif => exporter.export_frame_sequence(out_dir, settings, args.size)?,
        Format::Mp4 => exporter.export_video(out_dir, settings, args.size)?,
    };
    report(&path);
    Ok(())
}
