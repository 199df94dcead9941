// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Termgantt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Termgantt CLI entrypoint.
//!
//! Reads a `label,start,end` CSV file and prints its Gantt chart to stdout. Logs go to stderr
//! (`RUST_LOG` overrides the level).

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use termgantt::config::ChartConfig;
use termgantt::format::load_schedule_csv;
use termgantt::render::{render_gantt, ChartGlyphs};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [options] <source.csv> [screen_width] [divide_every_h]\n\nOptions:\n  --config <path>          JSON chart config (positional values override it)\n  --plain                  render without hour divisions\n  --ascii                  use ASCII glyphs instead of Unicode\n  --max-label-width <n>    shorten longer labels with '…'\n  -v, --verbose            debug logging on stderr\n  -h, --help               show this help\n\nscreen_width defaults to 200 and divide_every_h to 6."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    source: Option<PathBuf>,
    screen_width: Option<usize>,
    divide_every_h: Option<u32>,
    config: Option<PathBuf>,
    plain: bool,
    ascii: bool,
    max_label_width: Option<usize>,
    verbose: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut positional = Vec::<String>::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-v" | "--verbose" => options.verbose = true,
            "--plain" => {
                if options.plain {
                    return Err(());
                }
                options.plain = true;
            }
            "--ascii" => {
                if options.ascii {
                    return Err(());
                }
                options.ascii = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(PathBuf::from(path));
            }
            "--max-label-width" => {
                if options.max_label_width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.max_label_width = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => return Err(()),
            _ => positional.push(arg),
        }
    }

    if options.help {
        return Ok(options);
    }

    let mut positional = positional.into_iter();
    options.source = Some(PathBuf::from(positional.next().ok_or(())?));

    if let Some(raw) = positional.next() {
        let width: usize = raw.parse().map_err(|_| ())?;
        if width == 0 {
            return Err(());
        }
        options.screen_width = Some(width);
    }

    if let Some(raw) = positional.next() {
        let every: u32 = raw.parse().map_err(|_| ())?;
        if every == 0 || options.plain {
            return Err(());
        }
        options.divide_every_h = Some(every);
    }

    if positional.next().is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn build_config(options: &CliOptions) -> Result<ChartConfig, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    if let Some(width) = options.screen_width {
        config.screen_width = width;
    }
    if let Some(every) = options.divide_every_h {
        config.divide_every_h = every;
    }
    if options.plain {
        config.divide_every_h = 0;
    }
    if options.ascii {
        config.glyphs = ChartGlyphs::ASCII;
    }
    if options.max_label_width.is_some() {
        config.max_label_width = options.max_label_width;
    }

    Ok(config)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "termgantt".to_owned());

    let options = match parse_options(args) {
        Ok(options) if options.help => {
            print_usage(&program);
            return;
        }
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_logging(options.verbose);

    let result = (|| -> Result<(), Box<dyn Error>> {
        let config = build_config(&options)?;
        debug!(?config, "resolved chart config");
        let chart_options = config.into_options()?;

        let source = options.source.as_deref().ok_or("missing source path")?;
        let schedule = load_schedule_csv(source)?;
        let rendered = render_gantt(&schedule, &chart_options)?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        stdout.flush()?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("termgantt: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{build_config, parse_options, CliOptions};
    use termgantt::render::ChartGlyphs;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| (*value).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_source_with_defaults() {
        let options = parse_options(args(&["plan.csv"])).expect("parse options");
        assert_eq!(
            options,
            CliOptions {
                source: Some(PathBuf::from("plan.csv")),
                ..CliOptions::default()
            }
        );

        let config = build_config(&options).expect("config");
        assert_eq!(config.screen_width, 200);
        assert_eq!(config.divide_every_h, 6);
    }

    #[test]
    fn parses_positional_width_and_division() {
        let options = parse_options(args(&["plan.csv", "80", "12"])).expect("parse options");
        assert_eq!(options.screen_width, Some(80));
        assert_eq!(options.divide_every_h, Some(12));
    }

    #[test]
    fn parses_flags_in_any_position() {
        let options = parse_options(args(&["--ascii", "plan.csv", "-v", "60", "--plain"]))
            .expect("parse options");
        assert!(options.ascii);
        assert!(options.plain);
        assert!(options.verbose);
        assert_eq!(options.screen_width, Some(60));

        let config = build_config(&options).expect("config");
        assert_eq!(config.divide_every_h, 0);
        assert_eq!(config.glyphs, ChartGlyphs::ASCII);
    }

    #[test]
    fn parses_max_label_width_and_config_path() {
        let options = parse_options(args(&[
            "--max-label-width",
            "12",
            "--config",
            "chart.json",
            "plan.csv",
        ]))
        .expect("parse options");
        assert_eq!(options.max_label_width, Some(12));
        assert_eq!(options.config, Some(PathBuf::from("chart.json")));
    }

    #[test]
    fn help_does_not_require_a_source() {
        let options = parse_options(args(&["--help"])).expect("parse options");
        assert!(options.help);
        assert!(options.source.is_none());
    }

    #[test]
    fn rejects_missing_source() {
        parse_options(args(&[])).unwrap_err();
        parse_options(args(&["-v"])).unwrap_err();
    }

    #[test]
    fn rejects_zero_or_invalid_numbers() {
        parse_options(args(&["plan.csv", "0"])).unwrap_err();
        parse_options(args(&["plan.csv", "wide"])).unwrap_err();
        parse_options(args(&["plan.csv", "80", "0"])).unwrap_err();
        parse_options(args(&["--max-label-width", "x", "plan.csv"])).unwrap_err();
    }

    #[test]
    fn rejects_division_with_plain_and_extra_positionals() {
        parse_options(args(&["--plain", "plan.csv", "80", "6"])).unwrap_err();
        parse_options(args(&["plan.csv", "80", "6", "extra"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_and_repeated_flags() {
        parse_options(args(&["--color", "plan.csv"])).unwrap_err();
        parse_options(args(&["--ascii", "--ascii", "plan.csv"])).unwrap_err();
        parse_options(args(&["--config"])).unwrap_err();
    }
}
