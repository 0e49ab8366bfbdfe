use std::io::Read;
use std::process::ExitCode;

use scratchkit::Transform;

fn usage() -> ExitCode {
    eprintln!("usage: scratch-transform <transform> < input");
    eprintln!("transforms:");
    for t in Transform::ALL {
        eprintln!("  {t}");
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let name = match args.next() {
        Some(name) => name,
        None => return usage(),
    };
    let transform: Transform = match name.parse() {
        Ok(t) => t,
        Err(err) => {
            eprintln!("{err}");
            return usage();
        }
    };

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }
    // A final newline belongs to the shell, not the input.
    let input = input.strip_suffix('\n').unwrap_or(&input);
    let input = input.strip_suffix('\r').unwrap_or(input);

    match transform.apply(input) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
