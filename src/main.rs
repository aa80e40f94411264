//! # Telop CLI
//!
//! Usage:
//!   telop notes.txt
//!   telop notes.txt -o video.mp4 --font-size 48
//!   telop notes.txt --duration 3 --keep-symbols

use clap::Parser;
use std::path::PathBuf;

use telop::config::VideoConfig;
use telop::encoder::FfmpegEncoder;

#[derive(Parser)]
#[command(name = "telop")]
#[command(
    about = "Convert a text file into a video of readable, centered text frames",
    long_about = None
)]
struct Cli {
    /// Path to the input text file
    input: PathBuf,

    /// Output video file path
    #[arg(short, long, default_value = "output_video.mp4")]
    output: PathBuf,

    /// Font size for the rendered text
    #[arg(long, default_value_t = 32)]
    font_size: u32,

    /// Video width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Video height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Seconds each frame stays on screen
    #[arg(long, default_value_t = 2)]
    duration: u32,

    /// Background color
    #[arg(long, default_value = "black")]
    background_color: String,

    /// Text color
    #[arg(long, default_value = "white")]
    text_color: String,

    /// Explicit font file to render with (skips the candidate probe)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Keep symbol glyphs instead of substituting bracketed labels
    /// (they may not display properly in the output)
    #[arg(long)]
    keep_symbols: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = FfmpegEncoder::check_available() {
        eprintln!("✗ {error}");
        std::process::exit(1);
    }

    let config = VideoConfig {
        width: cli.width,
        height: cli.height,
        font_size: cli.font_size,
        frame_duration: cli.duration,
        background_color: cli.background_color,
        text_color: cli.text_color,
        substitute_symbols: !cli.keep_symbols,
        font_path: cli.font,
    };

    match telop::generate(&cli.input, &cli.output, &config) {
        Ok(report) => {
            eprintln!(
                "✓ Wrote {} ({} frames, {} seconds)",
                cli.output.display(),
                report.frame_count,
                report.duration_secs
            );
        }
        Err(error) => {
            eprintln!("✗ {error}");
            std::process::exit(1);
        }
    }
}
