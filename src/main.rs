//! todobase CLI entry point
//!
//! Parses arguments, dispatches via `cli::run`, and exits non-zero on
//! failure. All logic lives in the library.

use todobase::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
