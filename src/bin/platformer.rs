//! platformer - headless run of the pixel platformer.
//!
//! Simulates a scripted play-through (hold right, jump periodically) and
//! writes the final frame as a PNG.

use std::path::PathBuf;

use clap::Parser;
use pixel_platformer::config::GameConfig;
use pixel_platformer::framebuffer::Framebuffer;
use pixel_platformer::game::{Game, Key, SKY_COLOR};
use pixel_platformer::logging::{init_logging, LoggingConfig};
use pixel_platformer::output::PngEncoder;

/// Headless pixel platformer
#[derive(Parser, Debug)]
#[command(name = "platformer")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Software-rasterized platformer rendered to PNG", long_about = None)]
struct Cli {
    /// Frames to simulate
    #[arg(short, long, default_value = "240")]
    frames: u64,

    /// PNG file for the final frame
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Particle seed
    #[arg(long, default_value = "7")]
    seed: u64,

    /// Press jump every N frames (0 never jumps)
    #[arg(long, default_value = "45")]
    jump_every: u64,

    /// Log filter, e.g. "debug" or "pixel_platformer=trace"
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_filter.clone(),
        ..LoggingConfig::default()
    });

    // Load configuration
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(
            dirs::config_dir()
                .map(|p| p.join("pixel-platformer/config.yaml"))
                .unwrap_or_default(),
        ),
    };
    config.validate()?;

    let mut fb = Framebuffer::new(config.window.width, config.window.height)?;
    let mut game = Game::new(config, cli.seed);

    game.handle_key_down(Key::Right);
    for frame in 1..=cli.frames {
        if cli.jump_every > 0 && frame % cli.jump_every == 0 {
            game.handle_key_down(Key::Jump);
        }
        game.process_input();
        game.update();
        if game.exit_requested() {
            break;
        }
    }

    fb.clear(SKY_COLOR);
    game.render(&mut fb);
    PngEncoder::write_to_file(&fb, &cli.output)?;

    for line in game.hud_lines() {
        log::info!("{line}");
    }
    log::info!(
        "wrote frame {} to {}",
        game.frame(),
        cli.output.display()
    );

    Ok(())
}
