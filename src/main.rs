// Entry point: program main
// Handles --help, --catalog, --delay, --list, and runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::env;
use std::path::PathBuf;
use std::process;

use bubbletea_rs::Program;
use kiosk::catalog::Source;
use kiosk::ui::run::{set_run_config, RunConfig};
use kiosk::ui::{run_once, TeaAdapter};

fn print_help() {
    println!("kiosk - interactive product catalog browsing demo");
    println!();
    println!("Usage:");
    println!("  kiosk [options]");
    println!();
    println!("Options:");
    println!("  --catalog <file>  Load the product catalog from a JSON file instead of the built-in seed data.");
    println!("  --delay <ms>      Simulated refresh delay in milliseconds (default 1200).");
    println!("  --list            Print the catalog to stdout and exit (non-interactive).");
    println!("  --help            Show this help message.");
    println!();
    println!("Keys:");
    println!("  up/down           Move the highlight (one grid row per step in grid layout).");
    println!("  enter             Activate the highlighted product (single/multi selection).");
    println!("  space             Toggle the highlighted product (multi selection).");
    println!("  r                 Refresh the catalog (pull-to-refresh).");
    println!("  g                 Switch between linear and grid layout.");
    println!("  s                 Cycle selection mode: browse, single, multi.");
    println!("  e                 Switch the empty-state placeholder.");
    println!("  c                 Clear the list (shows the empty state).");
    println!("  q / esc / ctrl-c  Quit.");
}

struct CliArgs {
    catalog: Option<PathBuf>,
    delay_ms: u64,
    list_once: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        catalog: None,
        delay_ms: 1200,
        list_once: false,
    };
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" => {
                if i + 1 >= args.len() {
                    return Err("--catalog requires a file path".to_string());
                }
                parsed.catalog = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--delay" => {
                if i + 1 >= args.len() {
                    return Err("--delay requires a millisecond value".to_string());
                }
                parsed.delay_ms = args[i + 1]
                    .parse::<u64>()
                    .map_err(|_| format!("invalid --delay value: {}", args[i + 1]))?;
                i += 2;
            }
            "--list" => {
                parsed.list_once = true;
                i += 1;
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let parsed = match parse_args(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let source = match parsed.catalog {
        Some(path) => Source::File(path),
        None => Source::Seed,
    };

    if parsed.list_once {
        match run_once(&source) {
            Ok(out) => {
                print!("{out}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                process::exit(2);
            }
        }
    }

    set_run_config(RunConfig {
        source,
        delay_ms: parsed.delay_ms,
    });

    // Run interactive program
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = match builder.build() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("failed to build program: {e:?}");
            process::exit(2);
        }
    };
    match program.run().await {
        Ok(_final_model) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("program error: {e:?}");
            process::exit(2);
        }
    }
}
