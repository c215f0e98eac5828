//! PicoDB - Interactive Shell
//! A small REPL over a directory-backed key-value store.
//!
//! Usage: `picodb [--cache] [--compress] [--lock] [ROOT_DIR]`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use picodb::{Options, PicoDb};

#[derive(Parser, Debug)]
#[command(
    name = "picodb",
    about = "Interactive shell over a directory-backed key-value store",
    version
)]
struct Cli {
    /// Keep an in-memory copy of values in front of the disk
    #[arg(long)]
    cache: bool,

    /// Gzip values at rest
    #[arg(long)]
    compress: bool,

    /// Serialize writes issued by this process
    #[arg(long)]
    lock: bool,

    /// Directory holding one file per key (default: ./picodb)
    root_dir: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::defaults();
        if let Some(root_dir) = &self.root_dir {
            options = options.with_root_dir(root_dir);
        }
        if self.cache {
            options = options.with_caching();
        }
        if self.compress {
            options = options.with_compression();
        }
        if self.lock {
            options = options.with_locking();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let options = Cli::parse().options();

    println!();
    println!("  PicoDB key-value store");
    println!("  root: {}", options.root_dir.display());
    println!();
    println!("  Commands:");
    println!("    set <key> <value>  - Store a value");
    println!("    get <key>          - Load a value");
    println!("    del <key>          - Delete a key");
    println!("    info               - Show store statistics");
    println!("    exit               - Quit");
    println!();

    let db = match PicoDb::open(options) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("[ERROR] Failed to open store: {}", err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("picodb> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "set" | "put" => {
                if parts.len() < 3 {
                    println!("  Usage: set <key> <value>");
                    continue;
                }
                match db.store_string(parts[1], &parts[2..].join(" ")) {
                    Ok(()) => println!("  OK"),
                    Err(e) => println!("  ERROR: {}", e),
                }
            }
            "get" => {
                if parts.len() < 2 {
                    println!("  Usage: get <key>");
                    continue;
                }
                match db.load(parts[1]) {
                    Ok(value) => match String::from_utf8(value) {
                        Ok(s) => println!("  \"{}\"", s),
                        Err(e) => println!("  <binary data, {} bytes>", e.as_bytes().len()),
                    },
                    Err(e) if e.is_not_found() => println!("  (nil)"),
                    Err(e) => println!("  ERROR: {}", e),
                }
            }
            "del" | "delete" => {
                if parts.len() < 2 {
                    println!("  Usage: del <key>");
                    continue;
                }
                match db.delete(parts[1]) {
                    Ok(()) => println!("  OK (deleted)"),
                    Err(e) => println!("  ERROR: {}", e),
                }
            }
            "info" | "stats" => {
                let opt = db.options();
                println!("  Root:        {}", opt.root_dir.display());
                println!("  Caching:     {}", opt.caching);
                println!("  Compression: {}", opt.compression);
                println!("  Locking:     {}", opt.locking);
                if let Some(len) = db.cached_len() {
                    println!("  Cached:      {} entries", len);
                }
                println!("{}", db.metrics().report());
            }
            "exit" | "quit" | "q" => break,
            _ => {
                println!("  Unknown command: '{}'. Type 'exit' to quit.", parts[0]);
            }
        }
    }
}
