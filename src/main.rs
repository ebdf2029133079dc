use std::{
    fs::File,
    io::{self, BufReader, BufWriter, IsTerminal},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use shunt::driver::run;

/// shunt evaluates one infix expression per line of a file and writes each
/// result with two decimals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File holding one expression per line.
    input: PathBuf,

    /// Where to write the results.
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Write results to standard output instead of a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = File::open(&args.input).map(BufReader::new).unwrap_or_else(|_| {
                                                                   eprintln!("'{}' does not exist.",
                                                                             args.input.display());
                                                                   std::process::exit(1);
                                                               });

    let result = if args.stdout {
        run(input, &mut io::stdout().lock())
    } else {
        File::create(&args.output).and_then(|file| run(input, &mut BufWriter::new(file)))
    };

    if let Err(e) = result {
        eprintln!("Failed to process '{}': {e}", args.input.display());
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry().with(Layer::new().with_writer(io::stderr)
                                                    .with_ansi(io::stderr().is_terminal())
                                                    .with_target(false)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("shunt", level)))
                                  .init();
}
