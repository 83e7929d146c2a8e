//! Simple command that prints one or '-n count' UUID strings, or checks '-c uuid' arguments

use std::{env, io, io::Write, process::ExitCode};

enum Command {
    Generate(usize),
    Check(Vec<String>),
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count | -c uuid...]",
                    program.as_deref().unwrap_or("hashuuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate(count) => {
            for _ in 0..count {
                writeln!(buf, "{}", hashuuid::generate())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(inputs) => {
            let mut all_valid = true;
            for input in inputs {
                match hashuuid::codec::decode(&input) {
                    Ok(uuid) => writeln!(buf, "{}: ok ({})", input, uuid)?,
                    Err(err) => {
                        all_valid = false;
                        writeln!(buf, "{}: {}", input, err)?;
                    }
                }
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let Some(arg) = args.next() else {
        return Ok(Command::Generate(1));
    };
    match arg.as_str() {
        "-n" => {
            let Some(n_arg) = args.next() else {
                return Err("argument to option 'n' missing".to_owned());
            };
            let Ok(count) = n_arg.parse() else {
                return Err(format!("invalid argument to option 'n': '{}'", n_arg));
            };
            if let Some(extra) = args.next() {
                return Err(format!("unrecognized argument '{}'", extra));
            }
            Ok(Command::Generate(count))
        }
        "-c" => {
            let inputs: Vec<String> = args.collect();
            if inputs.is_empty() {
                return Err("argument to option 'c' missing".to_owned());
            }
            Ok(Command::Check(inputs))
        }
        _ => Err(format!("unrecognized argument '{}'", arg)),
    }
}
