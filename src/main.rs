use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = overlap_dag::cli::run() {
        eprintln!("Error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
