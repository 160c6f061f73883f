use std::process::ExitCode;

fn main() -> ExitCode {
    stackquiz_cli::run()
}
