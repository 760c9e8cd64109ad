//! Headless toolkit demo
//!
//! Drives a virtual terminal over the in-memory headless device and dumps
//! the resulting character buffer. Useful for eyeballing the terminal
//! semantics and for generating deterministic snapshots.
//!
//! # Usage
//!
//! ```bash
//! # Render the demo screen as text
//! weft-demo
//!
//! # Custom grid, JSON snapshot
//! weft-demo --cols 40 --rows 12 --json
//! ```

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use weft::terminal::{
    AnsiColor, DeviceEmulator, HeadlessDevice, Sgr, TerminalSize, TextColor, VirtualTerminal,
};

/// Command-line arguments
struct Args {
    /// Terminal columns
    cols: usize,
    /// Terminal rows
    rows: usize,
    /// Output as JSON instead of text
    json: bool,
    /// Show help
    help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            json: false,
            help: false,
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            }
            "-c" | "--cols" => {
                i += 1;
                if i < argv.len() {
                    args.cols = argv[i].parse().unwrap_or(80);
                }
            }
            "-r" | "--rows" => {
                i += 1;
                if i < argv.len() {
                    args.rows = argv[i].parse().unwrap_or(24);
                }
            }
            "-j" | "--json" => {
                args.json = true;
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn print_help() {
    eprintln!(
        r#"weft-demo - Headless virtual terminal demo

USAGE:
    weft-demo [OPTIONS]

OPTIONS:
    -h, --help        Show this help message
    -c, --cols <N>    Terminal columns (default: 80)
    -r, --rows <N>    Terminal rows (default: 24)
    -j, --json        Output buffer snapshot as JSON instead of text
"#
    );
}

fn write_line(term: &mut VirtualTerminal<HeadlessDevice>, column: i32, row: i32, text: &str) {
    term.move_cursor(column, row);
    for glyph in text.chars() {
        term.put_character(glyph);
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    if args.help {
        print_help();
        return Ok(());
    }

    let size = TerminalSize::new(args.cols, args.rows);
    let mut term = VirtualTerminal::new(HeadlessDevice::new(size), size);

    term.enter_private_mode();
    term.clear_screen();

    term.enable_sgr(Sgr::Bold);
    write_line(&mut term, 2, 1, "weft virtual terminal");
    term.reset_all_sgr();

    term.set_foreground_color(AnsiColor::Green);
    write_line(&mut term, 2, 3, "named palette entry");
    term.set_foreground_color(TextColor::indexed(208));
    write_line(&mut term, 2, 4, "indexed palette entry");
    term.set_foreground_color(TextColor::rgb(120, 80, 200));
    write_line(&mut term, 2, 5, "24-bit rgb triple");
    term.set_foreground_color(TextColor::Default);

    // Let the last line wrap over the right edge to show the advance rule
    write_line(
        &mut term,
        (args.cols as i32 - 10).max(0),
        7,
        "wrapping over the edge",
    );

    term.flush();
    term.exit_private_mode();

    let output = if args.json {
        term.device()
            .buffer()
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    } else {
        term.device().buffer().to_text()
    };

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
