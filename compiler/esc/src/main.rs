//! esc: ECMAScript tokenizer CLI

use esc::{explain_error, init_tracing, lex_files, parse_lex_args};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match parse_lex_args(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: esc lex <file.js>... [options]");
                    std::process::exit(1);
                }
            };
            if lex_files(&options) > 0 {
                std::process::exit(1);
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: esc explain <ERROR_CODE>");
                eprintln!("Example: esc explain E0011");
                std::process::exit(1);
            }
            if !explain_error(&args[2]) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("esc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("esc: ECMAScript tokenizer");
    println!();
    println!("Usage: esc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.js>...     Tokenize files and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E0011)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --utf16              Tokenize as UTF-16 instead of UTF-8");
    println!("  --strict             Treat all code as strict mode code");
    println!("  --no-html-comments   Do not recognize <!-- and --> comments");
    println!("  --extra-warnings     Report lint-style warnings");
    println!("  --werror             Treat warnings as errors");
    println!("  --muted              Hide source details in diagnostics");
    println!("  --line=<n>           Line number of the first line (default 1)");
    println!("  --column=<n>         Column of the first line (default 0)");
    println!("  --format=<fmt>       Diagnostics as text (default) or json");
    println!();
    println!("Examples:");
    println!("  esc lex app.js");
    println!("  esc lex src/*.js --strict --format=json");
    println!("  esc explain E0040");
    println!();
    println!("Set RUST_LOG=es_lexer=trace to log every token.");
}
