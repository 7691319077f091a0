use std::process::ExitCode;

use gridline_cli::{MERGE_USAGE, MergeArgs, finish, init_tracing, parse_or_exit, pipeline};

fn main() -> ExitCode {
    init_tracing();
    let args: MergeArgs = match parse_or_exit(MERGE_USAGE) {
        Ok(args) => args,
        Err(code) => return code,
    };
    finish(pipeline::merge_files(&args, &mut std::io::stderr()))
}
