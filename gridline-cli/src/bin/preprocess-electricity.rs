use std::process::ExitCode;

use gridline_cli::{ELECTRICITY_USAGE, ElectricityArgs, finish, init_tracing, parse_or_exit, pipeline};

fn main() -> ExitCode {
    init_tracing();
    let args: ElectricityArgs = match parse_or_exit(ELECTRICITY_USAGE) {
        Ok(args) => args,
        Err(code) => return code,
    };
    finish(pipeline::preprocess_electricity(&args, &mut std::io::stderr()))
}
