use anyhow::{Context, Result};
use review_prism_config::Config;
use review_prism_engine::{CueTable, ReviewFormatter};
use std::{
    env, fs,
    io::Read,
    path::{Path, PathBuf},
    process,
};

mod page;

const DEFAULT_TITLE: &str = "Review Report";

struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    summary: bool,
    page: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [options] [report-file]");
    eprintln!();
    eprintln!("Renders an AI review report as a styled HTML fragment.");
    eprintln!("Reads from stdin when no report file is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --summary        render the compact badge summary instead of the full report");
    eprintln!("  --page           wrap the output in a self-contained preview page");
    eprintln!("  --config <path>  load settings from <path> instead of the default location");
    eprintln!("  -o <path>        write to <path> instead of stdout");
}

fn parse_args() -> Args {
    let argv: Vec<String> = env::args().collect();
    let program = argv[0].clone();

    let mut args = Args {
        input: None,
        output: None,
        config: None,
        summary: false,
        page: false,
    };

    let mut iter = argv.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--summary" => args.summary = true,
            "--page" => args.page = true,
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config requires a path");
                    print_usage(&program);
                    process::exit(1);
                }
            },
            "-o" => match iter.next() {
                Some(path) => args.output = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: -o requires a path");
                    print_usage(&program);
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&program);
                process::exit(0);
            }
            flag if flag.starts_with('-') && flag != "-" => {
                eprintln!("Error: unknown option {flag}");
                print_usage(&program);
                process::exit(1);
            }
            _ if args.input.is_some() => {
                eprintln!("Error: more than one report file given");
                print_usage(&program);
                process::exit(1);
            }
            path => args.input = Some(PathBuf::from(path)),
        }
    }

    args
}

fn read_report(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read report file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read report from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args();

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();
    log::debug!("config: {config:?}");

    let cues = CueTable::shared().with_extra_keywords(&config.cues)?;
    let formatter = ReviewFormatter::with_cue_table(cues, config.format_options());

    let text = read_report(args.input.as_deref())?;
    log::info!("formatting {} bytes of review text", text.len());

    let fragment = if args.summary {
        formatter.format_simple(Some(text.as_str()))
    } else {
        formatter.format(Some(text.as_str()))
    };

    let rendered = if args.page {
        let title = args
            .input
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        page::render_page(&title, &fragment)
    } else {
        fragment
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write output to {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
