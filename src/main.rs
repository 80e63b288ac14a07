use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use watermark_manager::config::Config;
use watermark_manager::session::{Session, TerminalPrompter};

/// Watermark Manager - stamp a text or image watermark onto your pictures
#[derive(Parser, Debug)]
#[command(name = "watermark-manager")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the images, overrides `image_dir`
    #[arg(short = 'd', long)]
    image_dir: Option<PathBuf>,

    /// Test configuration and exit
    #[arg(long)]
    check_config: bool,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(dir) = &args.image_dir {
        config.image_dir = dir.clone();
    }

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    Ok(config)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    if args.check_config {
        println!(
            "Configuration OK: image_dir={}, defaults={}/{}, suffix={}, jpeg_quality={}",
            config.image_dir.display(),
            config.defaults.input_image,
            config.defaults.watermark_image,
            config.output.suffix,
            config.output.jpeg_quality,
        );
        return Ok(());
    }

    watermark_manager::logging::init_subscriber(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    tracing::info!(
        config_file = ?args.config,
        image_dir = %config.image_dir.display(),
        "Configuration loaded successfully"
    );

    if !config.image_dir.is_dir() {
        tracing::warn!(
            image_dir = %config.image_dir.display(),
            "Image directory does not exist"
        );
    }

    let prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(config, prompter);
    session.run().context("Terminal I/O failed")?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
