use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = coco2yolo::run() {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
