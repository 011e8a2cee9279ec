use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use neopixel_strobe::config::Config;
use neopixel_strobe::{MemoryStrip, Protocol, SerialStrip, StripDriver, StrobeBuffer};

#[derive(Parser)]
#[command(name = "neopixel-strobe")]
#[command(about = "Flash-to-white strobe overlay for serial-attached LED strips", long_about = None)]
struct Cli {
    /// Path to configuration file (JSON)
    config: PathBuf,

    /// Enable debug logging (one line per frame)
    #[arg(long)]
    debug: bool,

    /// Render into memory instead of opening the serial port
    #[arg(long)]
    dry_run: bool,

    /// Serial framing, overriding `output.protocol` (adalight or awa)
    #[arg(long)]
    protocol: Option<Protocol>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the configured pixels once
    Show,
    /// Turn strobe mode on or off
    Strobe {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Alternate strobe on and off every `period_ms` until Ctrl-C
    Blink {
        /// Stop after this many flashes
        #[arg(long)]
        count: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::load(&cli.config)?;
    if let Some(protocol) = cli.protocol {
        config.output.serial.protocol = protocol;
    }

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    if let Err(e) = ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::Relaxed);
    }) {
        warn!("Could not set Ctrl-C handler: {}", e);
    }

    let output = &config.output;
    if cli.dry_run {
        let strip = MemoryStrip::new(output.pixel_count, output.color_layout);
        let mut strobe: StrobeBuffer<_> =
            StrobeBuffer::from_driver(strip, config.strobe.brightness)
                .context("Failed to set up strobe buffer")?;
        run(&mut strobe, &config, &cli.command, &running)?;
        info!(frames = strobe.driver().frames_sent(), "dry run finished");
    } else {
        let mut strobe: StrobeBuffer<SerialStrip> = StrobeBuffer::open_with_brightness(
            output.pixel_count,
            output.serial.clone(),
            output.color_layout,
            config.strobe.brightness,
        )
        .with_context(|| format!("Failed to open strip on {}", output.serial.port))?;
        run(&mut strobe, &config, &cli.command, &running)?;

        let strip = strobe.driver();
        if strip.frames_failed() > 0 {
            warn!(
                sent = strip.frames_sent(),
                failed = strip.frames_failed(),
                "some frames were not delivered"
            );
        }
    }

    Ok(())
}

fn run<D: StripDriver>(
    strobe: &mut StrobeBuffer<D>,
    config: &Config,
    command: &Command,
    running: &AtomicBool,
) -> Result<()> {
    for (index, &color) in config.pixels.iter().enumerate() {
        strobe
            .write_pixel(index, color)
            .context("Too many entries in `pixels`")?;
    }

    match command {
        Command::Show => strobe.render(),
        Command::Strobe { state } => strobe.set_strobe_mode(matches!(state, Toggle::On)),
        Command::Blink { count } => {
            blink(strobe, config.strobe.period_ms, *count, running);

            // Leave the strip dark
            strobe.clear_all();
            strobe.set_strobe_mode(false);
        }
    }

    Ok(())
}

fn blink<D: StripDriver>(
    strobe: &mut StrobeBuffer<D>,
    period_ms: u64,
    count: Option<u32>,
    running: &AtomicBool,
) {
    let period = Duration::from_millis(period_ms);
    let mut flashes = 0u32;

    info!(period_ms, "blinking (Ctrl-C to stop)");
    while running.load(Ordering::Relaxed) && count.map_or(true, |n| flashes < n) {
        strobe.set_strobe_mode(true);
        thread::sleep(period);
        strobe.set_strobe_mode(false);
        thread::sleep(period);
        flashes += 1;
    }
    info!(flashes, "blink stopped");
}
