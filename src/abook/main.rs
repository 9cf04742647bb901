//! The binary only invokes `cli::run()` and turns errors into an exit code.
//! Everything else lives in the `cli` module and the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
