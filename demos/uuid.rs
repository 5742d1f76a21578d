//! Simple command that prints one or '-n count' UUID strings of the chosen version

use anvl_uuid::Uuid;
use std::{env, io, io::Write, process::ExitCode};

/// Version of identifiers to print.
#[derive(Debug, PartialEq)]
enum Mode {
    V4,
    V5(String),
    V7,
}

fn main() -> io::Result<ExitCode> {
    let (mode, count) = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {message}");
                eprintln!(
                    "Usage: {} [-4 | -5 name | -7] [-n count]",
                    program.as_deref().unwrap_or("uuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        let uuid = match &mode {
            Mode::V4 => anvl_uuid::uuid4(),
            Mode::V5(name) => Uuid::v5(&Uuid::NAMESPACE_DNS, name),
            Mode::V7 => anvl_uuid::uuid7(),
        };
        writeln!(buf, "{}", uuid.hyphenated())?;
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Mode, usize), String> {
    let mut mode = None;
    let mut count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-4" | "-5" | "-7" => {
                if mode.is_some() {
                    return Err("version given more than once".to_owned());
                }
                mode = Some(match arg.as_str() {
                    "-4" => Mode::V4,
                    "-7" => Mode::V7,
                    _ => {
                        let Some(name) = args.next() else {
                            return Err("argument to option '5' missing".to_owned());
                        };
                        Mode::V5(name)
                    }
                });
            }
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{n_arg}'"));
                };
                count = Some(c);
            }
            _ => return Err(format!("unrecognized argument '{arg}'")),
        }
    }
    Ok((mode.unwrap_or(Mode::V4), count.unwrap_or(1)))
}
