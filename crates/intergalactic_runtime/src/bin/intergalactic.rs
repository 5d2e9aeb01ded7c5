//! Intergalactic converter CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use intergalactic_runtime::{Repl, Session, SessionConfig};
use tracing::Level;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    interactive: bool,
    show_help: bool,
    show_version: bool,
    verbosity: u8,
    precision: Option<usize>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-i" | "--interactive" => config.interactive = true,
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            arg if arg.len() > 1 && arg.starts_with('-') && arg[1..].bytes().all(|b| b == b'v') => {
                let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            "--precision" => {
                i += 1;
                if i >= args.len() {
                    return Err("--precision requires a value".into());
                }
                config.precision = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --precision value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("intergalactic {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.verbosity);

    let mut session_config = SessionConfig::default();
    if let Some(precision) = config.precision {
        session_config = session_config.with_precision(precision);
    }
    let mut session = Session::new().with_config(session_config);

    if config.interactive {
        if let Some(file) = &config.file {
            let reader = BufReader::new(File::open(file)?);
            session.run_with(reader, |response| println!("{response}"))?;
        }
        let banner = config.file.is_none();
        let mut repl = Repl::new()?.with_session(session);
        if !banner {
            repl = repl.without_banner();
        }
        repl.run()?;
        return Ok(());
    }

    let processed = match &config.file {
        Some(file) => {
            let reader = BufReader::new(File::open(file)?);
            session.run_with(reader, |response| println!("{response}"))?
        }
        None => session.run_with(io::stdin().lock(), |response| println!("{response}"))?,
    };
    tracing::info!(processed, "input finished");

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mIntergalactic\x1b[0m - Galactic numeral and credits converter

\x1b[1mUSAGE:\x1b[0m
    intergalactic [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Statements to process (defaults to stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -i, --interactive    Start the interactive prompt (after FILE, if given)
    -v, --verbose        Log to stderr; repeat for more detail
    --precision N        Decimals printed for credit amounts (default 2)

Processing stops at the first empty line or at end of input.

\x1b[1mEXAMPLES:\x1b[0m
    intergalactic < notes.txt        Answer every question in notes.txt
    intergalactic notes.txt          Same, reading the file directly
    intergalactic -i notes.txt       Load notes.txt, then keep asking
    intergalactic -vv notes.txt      Show why statements fail"
    );
}
