//! Startup banner

use super::config::is_all_interfaces;
use super::constants::{API_PREFIX, APP_NAME};

/// Base URL clients should use for the configured bind address
pub fn base_url(host: &str, port: u16) -> String {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };
    format!("http://{}:{}", display_host, port)
}

/// Print the startup banner with URLs
pub fn print_banner(host: &str, port: u16, database: &str) {
    let base = base_url(host, port);
    const W: usize = 10;

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}{}/books",
        "Books:", base, API_PREFIX
    );
    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m {}/api/docs",
        "Docs:", base
    );
    println!(
        "  \x1b[90m➜  {:<W$} {}\x1b[0m",
        "Database:", database
    );
    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    }
    println!();
}
