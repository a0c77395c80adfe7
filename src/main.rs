use clap::Parser;
use rebrand::log_status;

mod commands;
mod output;

use commands::{run, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version = VERSION)]
#[command(about = "Replace branding strings across a project tree")]
struct Cli {
    #[command(flatten)]
    args: run::RunArgs,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let result = run::run(cli.args, &global);

    if global.json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        if output::print_json_result(json_result).is_err() {
            return std::process::ExitCode::from(1);
        }
        return std::process::ExitCode::from(exit_code_to_u8(exit_code));
    }

    match result {
        Ok((run_output, exit_code)) => {
            if let Err(err) = output::print_line(&run::summary_line(&run_output.summary())) {
                log_status!("output", "Failed to write summary: {}", err);
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            for hint in &err.hints {
                eprintln!("  hint: {}", hint.message);
            }
            std::process::ExitCode::from(exit_code_to_u8(output::exit_code_for_error(err.code)))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
