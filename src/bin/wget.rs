//! `wget URL`: fetch a URL over HTTP/1.1 and write the raw body to stdout.

#[macro_use]
extern crate log;

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use wget_lite::network::application::http::{Client, uri};
use wget_lite::network::tcp::TcpConnector;

const MODULE: &str = "WGET";

/// Largest `--parts` JSON document.
const PARTS_JSON_CAPACITY: usize = 4096;

/// Fetch a URL over plain HTTP/1.1 and print the response body
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL to fetch, e.g. http://example.com/index.html
    url: String,

    /// Print how the URL is split into components, as JSON, instead of fetching it
    #[arg(long)]
    parts: bool,

    /// Give up on a stalled connection after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log verbosity on stderr: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn init_logger(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("[{}] Logger already initialized", MODULE);
    }
}

fn render_parts(url: &str) -> Result<heapless::String<PARTS_JSON_CAPACITY>, String> {
    serde_json_core::to_string(&uri::parse(url))
        .map_err(|e| format!("cannot render URL parts: {}", e))
}

fn print_parts(url: &str) -> Result<(), String> {
    let json = render_parts(url)?;
    println!("{}", json);
    Ok(())
}

fn fetch(url: &str, timeout: Option<Duration>) -> Result<(), String> {
    let connector = TcpConnector { timeout };
    let mut client = Client::new(connector);
    let body = client.get(url).map_err(|e| e.to_string())?;
    info!("[{}] Received {} bytes from {}", MODULE, body.len(), url);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&body)
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("cannot write to stdout: {}", e))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    let result = if args.parts {
        print_parts(&args.url)
    } else {
        fetch(&args.url, args.timeout.map(Duration::from_secs))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wget: {}", e);
            ExitCode::FAILURE
        }
    }
}
