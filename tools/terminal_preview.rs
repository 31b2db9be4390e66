//! Terminal preview for rgb-cycler
//!
//! Paints a truecolor bar in the terminal and cycles it with the chosen mode,
//! using the wall clock. Handy for eyeballing a pattern before wiring the
//! library into a real window or LED.
//!
//! Usage:
//!   cd tools
//!   cargo run --release --bin terminal_preview -- rainbow 5 1530
//!
//! Arguments: `[mode] [interval_ms] [ticks]`, defaulting to `rgb 100 30`.
//! Set `RGB_CYCLER_LOG=debug` to see run-control records on stderr.

use palette::{FromColor, Hsv};
use rgb_cycler::color::normalized;
use rgb_cycler::{
    Color, ColorCycler, ColorSurface, CyclerConfig, ServiceTiming, StdClock, StdInstant,
};
use std::io::{self, Write};
use std::process::ExitCode;

const BAR_WIDTH: usize = 48;

/// Hue in degrees and saturation of a color, for the status readout.
fn hue_and_saturation(color: Color) -> (f32, f32) {
    let hsv: Hsv = Hsv::from_color(normalized(color));
    (hsv.hue.into_positive_degrees(), hsv.saturation)
}

struct TerminalSurface {
    out: io::Stdout,
}

impl ColorSurface for TerminalSurface {
    fn fill(&mut self, color: Color) {
        let (hue, saturation) = hue_and_saturation(color);
        let mut out = self.out.lock();
        // Surface writes cannot fail; a broken pipe just stops the preview output.
        let _ = write!(
            out,
            "\r\x1b[48;2;{};{};{}m{:width$}\x1b[0m ({:3}, {:3}, {:3}) hue {:5.1} sat {:.2}",
            color.red,
            color.green,
            color.blue,
            "",
            color.red,
            color.green,
            color.blue,
            hue,
            saturation,
            width = BAR_WIDTH
        );
        let _ = out.flush();
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("RGB_CYCLER_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_args() -> Result<(CyclerConfig, u64), String> {
    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "rgb".to_string());
    let interval_ms = match args.next() {
        Some(text) => text
            .parse::<u32>()
            .map_err(|err| format!("invalid interval {:?}: {}", text, err))?,
        None => rgb_cycler::DEFAULT_INTERVAL_MS,
    };
    let ticks = match args.next() {
        Some(text) => text
            .parse::<u64>()
            .map_err(|err| format!("invalid tick count {:?}: {}", text, err))?,
        None => 30,
    };

    let config = CyclerConfig::builder()
        .mode_name(&mode)
        .and_then(|builder| builder.interval_millis(interval_ms).build())
        .map_err(|err| err.to_string())?;

    Ok((config, ticks))
}

fn main() -> ExitCode {
    init_logging();

    let (config, ticks) = match parse_args() {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("usage: terminal_preview [rgb|bw|rainbow] [interval_ms 1-5000] [ticks]");
            return ExitCode::FAILURE;
        }
    };

    println!("{} every {} ms", config.mode(), config.interval().as_millis());

    let clock = StdClock;
    let surface = TerminalSurface { out: io::stdout() };
    let mut cycler = ColorCycler::<StdInstant, _, _>::new(surface, &clock, config);

    if let Err(err) = cycler.start() {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }

    while cycler.ticks() < ticks {
        match cycler.service() {
            ServiceTiming::Delay(delay) => std::thread::sleep(delay),
            ServiceTiming::Idle => break,
        }
    }

    if let Err(err) = cycler.stop() {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    println!();

    ExitCode::SUCCESS
}
