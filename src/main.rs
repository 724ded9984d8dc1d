//! pen-plot CLI entry point.
//!
//! Values not given on the command line are prompted for with `> `.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pen_plot::config::PlotConfig;
use pen_plot::renderers::charset::CharSet;
use pen_plot::Interpreter;

/// Pen-plotting script to ASCII grid output.
#[derive(Parser, Debug)]
#[command(
    name = "pen-plot",
    version = env!("PEN_PLOT_VERSION"),
    about = "Pen-plotting script to ASCII grid output"
)]
struct Cli {
    /// Script file (prompted for if not provided)
    input: Option<String>,

    /// Grid width in cells (prompted for if not provided)
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height in cells (prompted for if not provided)
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Use Unicode line-drawing glyphs instead of plain ASCII
    #[arg(short = 'u', long = "unicode")]
    unicode: bool,

    /// Write the grid to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

/// Print `> ` and read one trimmed line from stdin.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<String> {
    print!("> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while prompting",
        )),
    }
}

fn parse_dimension(name: &str, raw: &str) -> usize {
    raw.parse()
        .unwrap_or_else(|_| fail(format!("invalid {name} '{raw}': expected a non-negative integer")))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Collect path, width and height in that order, like the interactive driver
    let path = match cli.input {
        Some(p) => p,
        None => prompt(&mut lines).unwrap_or_else(|e| fail(e)),
    };
    let width = match cli.width {
        Some(w) => w,
        None => parse_dimension("width", &prompt(&mut lines).unwrap_or_else(|e| fail(e))),
    };
    let height = match cli.height {
        Some(h) => h,
        None => parse_dimension("height", &prompt(&mut lines).unwrap_or_else(|e| fail(e))),
    };

    let text = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => fail(format!("cannot read '{}': {}", path, e)),
    };

    let charset = if cli.unicode {
        CharSet::Unicode
    } else {
        CharSet::Ascii
    };
    let config = PlotConfig::new(width, height).with_charset(charset);

    // Undecodable lines are reported as they are reached, even if a later
    // draw aborts the run.
    let report = match Interpreter::new(&config).run_with(&text, |d| eprintln!("{}", d)) {
        Ok(r) => r,
        Err(e) => fail(e),
    };
    let rendered = report.render();

    if let Some(ref out) = cli.output {
        if let Err(e) = fs::write(out, rendered) {
            fail(format!("cannot write '{}': {}", out, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
