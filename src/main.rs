use std::{fs, path::PathBuf, process};

use clap::Parser as ClapParser;
use log::debug;
use monkey::{
    display_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

const SAMPLE_INPUT: &str = "1 + 2 * 3 + 4";

#[derive(ClapParser, Debug)]
#[command(about = "Tokenize and parse a Monkey program, printing the AST")]
struct Args {
    /// Source file to read; the built-in sample program is used when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the parsed statements
    #[arg(long)]
    tokens: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let source = match &args.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("reading `{}` failed: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => String::from(SAMPLE_INPUT),
    };

    debug!("Running: \n{}\n", source);

    if args.tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
        return;
    }

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            display_error(error);
        }
        process::exit(65);
    }

    for stmt in program.iter() {
        println!("{}", stmt);
    }
}
