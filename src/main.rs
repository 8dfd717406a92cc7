//! Harmony Wheel command-line entry point.
//!
//! Usage: `harmony-wheel [COLOR] [HARMONY] [--out PATH] [--config PATH]`

use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Builder, Target};
use harmony_wheel::config::{AppConfig, LogLevel};
use harmony_wheel::display::describe_palette;
use harmony_wheel::render::{render_wheel, save_png};
use harmony_wheel::{HarmonyType, InteractionState};

/// Print a color harmony palette and optionally render the wheel.
#[derive(Parser, Debug)]
#[command(name = "harmony-wheel")]
#[command(version, about = "Interactive color harmony picker")]
struct Args {
    /// Base color as #rrggbb (default: configured initial color)
    color: Option<String>,

    /// complementary | analogous | monochromatic | triadic | tetradic
    #[arg(value_parser = clap::value_parser!(HarmonyType))]
    harmony: Option<HarmonyType>,

    /// Write the wheel with its markers to a PNG file
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Read settings from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_logger(level: LogLevel) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(level.to_level_filter())
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
    match path {
        Some(path) => AppConfig::load_from_path(path)
            .map_err(|e| format!("Failed to load config {:?}: {}", path, e)),
        None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    init_logger(config.preferences.log_level);

    let prefs = &config.preferences;
    let layout = prefs.wheel.layout();
    let color = args.color.as_deref().unwrap_or(&prefs.initial_color);
    let harmony = args.harmony.unwrap_or(prefs.default_harmony);

    let state = InteractionState::from_color(color, &layout, harmony).map_err(|e| e.to_string())?;
    println!(
        "{}",
        describe_palette(state.palette()).map_err(|e| e.to_string())?
    );

    if let Some(out) = args.out {
        let out = if out.is_relative() && !prefs.export_folder.is_empty() {
            PathBuf::from(&prefs.export_folder).join(out)
        } else {
            out
        };
        let image = render_wheel(&layout, Some(&state)).map_err(|e| e.to_string())?;
        save_png(&image, &out).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("harmony-wheel").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_positionals() {
        let args = parse(&["#3366cc", "triadic"]).unwrap();
        assert_eq!(args.color.as_deref(), Some("#3366cc"));
        assert_eq!(args.harmony, Some(HarmonyType::Triadic));
        assert!(args.out.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let args = parse(&["--out", "wheel.png", "#ff0000", "-c", "cfg.json"]).unwrap();
        assert_eq!(args.out, Some(PathBuf::from("wheel.png")));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_parse_equals_form() {
        let args = parse(&["--out=wheel.png", "#ff0000"]).unwrap();
        assert_eq!(args.out, Some(PathBuf::from("wheel.png")));
        assert_eq!(args.color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["#ff0000", "square"]).is_err());
        assert!(parse(&["--out"]).is_err());
        assert!(parse(&["#ff0000", "triadic", "extra"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
