use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber;

use reelgraph::{
    assets::AssetStore,
    compositor::OverlayCompositor,
    config::JobConfig,
    video::{ImageSequenceSink, ImageSequenceSource},
};

#[derive(Parser)]
#[command(
    name = "reelgraph",
    version,
    about = "Burn broadcast-style overlays onto sports highlight clips",
    long_about = "ReelGraph composites a scoreboard strip, a team-vs-team intro, and an action callout onto every frame of a highlight clip, driven by a JSON job file describing the template, colors, and match facts."
)]
struct Cli {
    /// Job configuration file (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Asset root containing logos, icons, and font.ttf
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// Frame rate of the input sequences
    #[arg(short, long, default_value_t = 30.0)]
    fps: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting ReelGraph v{}", env!("CARGO_PKG_VERSION"));
    info!("Job: {:?}", cli.config);
    info!("Assets: {:?}", cli.assets);

    let job = JobConfig::from_file(&cli.config)?;
    job.validate()?;
    info!("Loaded job: {} clip(s)", job.clips.len());

    for (index, clip) in job.clips.iter().enumerate() {
        info!(
            "Clip {}/{}: {} -> {}",
            index + 1,
            job.clips.len(),
            clip.input,
            clip.output
        );

        let assets = AssetStore::new(&cli.assets);
        // Text elements need a glyph font; without one they are skipped the
        // same way missing logos are.
        let font = match assets.load_font() {
            Ok(font) => Some(font),
            Err(err) => {
                warn!("No usable font, text elements will be skipped: {}", err);
                None
            }
        };

        let mut compositor =
            OverlayCompositor::new(job.template.clone(), clip.meta.clone(), assets)?;
        if let Some(font) = font {
            compositor = compositor.with_font(Box::new(font));
        }

        let mut source = ImageSequenceSource::open(&clip.input, cli.fps)?;
        let mut sink = ImageSequenceSink::create(&clip.output)?;
        let report = compositor.compose(&mut source, &mut sink)?;

        info!("Clip complete: {} frames written", report.frames_written);
    }

    info!("All clips composed");
    Ok(())
}
