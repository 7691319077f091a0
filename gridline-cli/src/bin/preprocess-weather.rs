use std::process::ExitCode;

use gridline_cli::{WEATHER_USAGE, WeatherArgs, finish, init_tracing, parse_or_exit, pipeline};

fn main() -> ExitCode {
    init_tracing();
    let args: WeatherArgs = match parse_or_exit(WEATHER_USAGE) {
        Ok(args) => args,
        Err(code) => return code,
    };
    finish(pipeline::preprocess_weather(&args, &mut std::io::stderr()))
}
