use std::env;
use std::fs;
use std::process;

use jianpu::{parse_bpm, transcribe_midi, Settings};

fn usage() -> ! {
    eprintln!("Usage: jianpu <input.mid> [output.txt]");
    eprintln!("       jianpu --bpm <value> <input.mid> [output.txt]");
    eprintln!("       jianpu --settings <settings.yaml> <input.mid> [output.txt]");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    // Parse flags
    let mut settings = Settings::default();
    let mut rest = &args[1..];
    match args[1].as_str() {
        "--bpm" => {
            if args.len() < 4 {
                usage();
            }
            settings.bpm = match parse_bpm(&args[2]) {
                Ok(bpm) => bpm,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            rest = &args[3..];
        }
        "--settings" => {
            if args.len() < 4 {
                usage();
            }
            let source = match fs::read_to_string(&args[2]) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading settings '{}': {}", args[2], e);
                    process::exit(1);
                }
            };
            settings = match Settings::from_yaml(&source) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            rest = &args[3..];
        }
        _ => {}
    }

    let input_path = &rest[0];
    let output_path = rest.get(1);

    // Read input file
    let bytes = match fs::read(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Transcribe
    let lines = match transcribe_midi(&bytes, &settings) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Transcription error: {}", e);
            process::exit(1);
        }
    };

    let mut text = lines.join("\n");
    text.push('\n');

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &text) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote jianpu to {}", path);
        }
        None => {
            print!("{}", text);
        }
    }
}
