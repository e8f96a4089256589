use buku_core::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        buku_core::cli::output::error(&err);
        std::process::exit(1);
    }
}
