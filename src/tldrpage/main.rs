//! tldrpage binary: parses arguments via `cli`, reports errors and sets the
//! exit code. Everything else lives in the library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        if e.is_validation() {
            eprintln!("See 'tldrpage --help' for usage.");
        }
        std::process::exit(1);
    }
}
