//! Hotspot-labels CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = hotspot_labels::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
