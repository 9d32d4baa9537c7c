//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = parklah_cli::run() {
        eprintln!("parklah: {err}");
        std::process::exit(1);
    }
}
