//! Command-line interface for paradox
//! This binary checks, formats and inspects paradox script files.
//!
//! Usage:
//!   paradox format `<path>` [-o `<out>`]       - Rewrite a file as canonical text
//!   paradox inspect `<path>` [-f `<format>`]   - Print the parsed tree (treeviz, json, yaml, canonical)
//!   paradox check `<path>`...                 - Report whether each file parses
//!   paradox time `<path>` [-n `<iterations>`]  - Time the parser on a file
//!
//! Global flags: `-d` (repeatable) raises the log level, `--config <file>` layers a TOML
//! file over the built-in defaults. `RUST_LOG` directives take precedence over `-d`.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use paradox_script::paradox::config::{Loader, ParadoxConfig};
use paradox_script::paradox::formats::{CanonicalRenderer, OutputFormat};
use paradox_script::paradox::parsing::parse;
use paradox_script::paradox::processor::{parse_file, read_all_text, write_all_text};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

type CliResult = Result<(), Box<dyn Error>>;

fn cli() -> Command {
    Command::new("paradox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking, formatting and inspecting paradox script files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Raise the log level (-d info, -dd debug, -ddd trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file layered over the default configuration")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .about("Parse a file and write it back as canonical text")
                .arg(path_arg("Path to the paradox script file"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this file instead of stdout")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed tree in an output format")
                .arg(path_arg("Path to the paradox script file"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: canonical, json, yaml or treeviz"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that files parse")
                .arg(
                    Arg::new("path")
                        .help("Paths to paradox script files")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("time")
                .about("Measure parse time of a file (file reading is not timed)")
                .arg(path_arg("Path to the paradox script file"))
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .short('n')
                        .help("Number of parse runs")
                        .value_parser(value_parser!(u32).range(1..)),
                ),
        )
}

fn path_arg(help: &'static str) -> Arg {
    Arg::new("path")
        .help(help)
        .required(true)
        .index(1)
        .value_parser(value_parser!(PathBuf))
}

fn main() {
    let matches = cli().get_matches();
    setup_logging(matches.get_count("debug"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> CliResult {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("format", sub)) => handle_format_command(sub, &config),
        Some(("inspect", sub)) => handle_inspect_command(sub, &config),
        Some(("check", sub)) => handle_check_command(sub),
        Some(("time", sub)) => handle_time_command(sub, &config),
        Some((name, _)) => Err(format!("unknown command '{}'", name).into()),
        None => Err("no command given".into()),
    }
}

fn load_config(matches: &ArgMatches) -> Result<ParadoxConfig, Box<dyn Error>> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        tracing::debug!(path = %path.display(), "loading configuration file");
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn required_path(matches: &ArgMatches) -> Result<&PathBuf, Box<dyn Error>> {
    matches
        .get_one::<PathBuf>("path")
        .ok_or_else(|| "missing <path> argument".into())
}

/// Handle the format command
fn handle_format_command(matches: &ArgMatches, config: &ParadoxConfig) -> CliResult {
    let root = parse_file(required_path(matches)?)?;
    let output = CanonicalRenderer::with_indent(config.render.indent.clone()).render_to_string(&root);

    match matches.get_one::<PathBuf>("output") {
        Some(out) => write_all_text(out, &output)?,
        None => print!("{}", output),
    }
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches, config: &ParadoxConfig) -> CliResult {
    let format = match matches.get_one::<String>("format") {
        Some(name) => name.parse::<OutputFormat>()?,
        None => config.inspect.format,
    };

    let root = parse_file(required_path(matches)?)?;
    let output = format.serialize(&root, &config.format_options())?;
    print!("{}", output);
    if !output.ends_with('\n') && !output.is_empty() {
        println!();
    }
    Ok(())
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> CliResult {
    let paths: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("path")
        .map(|paths| paths.collect())
        .unwrap_or_default();

    let mut failed = 0;
    for path in &paths {
        match parse_file(path) {
            Ok(root) => println!("{}: ok ({} entries)", path.display(), root.children().len()),
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed to parse", failed, paths.len()).into());
    }
    Ok(())
}

/// Handle the time command
fn handle_time_command(matches: &ArgMatches, config: &ParadoxConfig) -> CliResult {
    let path = required_path(matches)?;
    let iterations = matches
        .get_one::<u32>("iterations")
        .copied()
        .unwrap_or(config.timing.iterations)
        .max(1);

    // Read up front so file access is not part of the measurement
    let content = read_all_text(path)?;
    let label = path.display().to_string();

    let start = Instant::now();
    for _ in 0..iterations {
        parse(&content, &label)?;
    }
    let elapsed = start.elapsed();

    println!("{} ms", elapsed.as_millis());
    if iterations > 1 {
        println!(
            "{} runs, {:.3} ms per run",
            iterations,
            elapsed.as_secs_f64() * 1000.0 / f64::from(iterations)
        );
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG directives refine the -d level, e.g. RUST_LOG=paradox_script::paradox::parsing=trace
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
