use std::process::ExitCode;

fn main() -> ExitCode {
    match imgmanifest::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
