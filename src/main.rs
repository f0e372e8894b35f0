use std::{env, fs::read_to_string, process::exit};

use tinyc::{
    deserialize_tokens, errors::errors::Error, format_error, parse, serialize_ast,
    serialize_tokens, tokenize,
};

const USAGE: &str = "usage: tinyc <lex|parse|ast> <file>";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("{}", USAGE);
        exit(2);
    }

    let mode: &str = &args[1];
    let file_path: &str = &args[2];
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let run: fn(&str) -> Result<String, Error> = match mode {
        "lex" => run_lex,
        "parse" => run_parse,
        "ast" => run_ast,
        _ => {
            eprintln!("unknown mode '{}'\n{}", mode, USAGE);
            exit(2);
        }
    };

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            exit(1);
        }
    };

    match run(&file_contents) {
        Ok(output) => print!("{}", output),
        Err(error) => {
            eprint!("{}", format_error(&error, &file_contents, file_name));
            exit(1);
        }
    }
}

/// Source file -> token dump.
fn run_lex(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    Ok(serialize_tokens(&tokens))
}

/// Token dump file -> AST dump.
fn run_parse(dump: &str) -> Result<String, Error> {
    let tokens = deserialize_tokens(dump)?;
    let ast = parse(tokens)?;
    Ok(serialize_ast(&ast))
}

/// Source file -> AST dump.
fn run_ast(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(tokens)?;
    Ok(serialize_ast(&ast))
}
