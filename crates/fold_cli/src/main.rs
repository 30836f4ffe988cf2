use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = fold_core::logging::init() {
        eprintln!("fold: logging unavailable: {e:#}");
    }

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    fold_core::fold_cli(&args, stdin.lock(), stdout.lock(), stderr.lock()).into()
}
