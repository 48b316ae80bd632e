//! CLI entry point for vignette
//!
//! Loads a story file, validates it, and runs the terminal player.

use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" => {
            if args.len() < 3 {
                eprintln!("Error: Missing story file path");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            let file_path = PathBuf::from(&args[2]);
            let debug = args.get(3).map(|s| s == "--debug").unwrap_or(false);
            run_play(file_path, debug);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("vignette - Linear-branching visual novel engine");
    println!();
    println!("USAGE:");
    println!("    cargo run -- play <story.json> [--debug]");
    println!();
    println!("COMMANDS:");
    println!("    play <file> [--debug]    Play a story in the terminal");
    println!("    --help, -h               Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --debug    Show the navigation state each frame");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run -- play demos/story.json");
    println!("    cargo run -- play demos/story.json --debug");
}

fn run_play(file_path: PathBuf, debug: bool) {
    // Malformed content is rejected whole before any navigation starts.
    let story = match vignette::content::from_file(&file_path) {
        Ok(story) => story,
        Err(err) => {
            eprintln!("Error: Failed to load story '{}'", file_path.display());
            eprintln!("Reason: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = vignette::cli::play::run_play(story, debug) {
        eprintln!("Error: Player mode failed");
        eprintln!("Reason: {}", err);
        process::exit(1);
    }
}
