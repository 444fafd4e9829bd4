//! # Buckling CLI Application
//!
//! Terminal front end for column buckling analysis.
//!
//! ```text
//! buckling analyze --length 3 --modulus 200 --inertia 9.6e6 --area 2850 --yield-stress 250
//! buckling analyze --input column.json --json
//! buckling convert 9.6e6 inertia mm4
//! buckling units
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use buckling_cli::{run, Cli};

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for reports and JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            // 2 = bad input, 1 = environment (files, serialization)
            if e.is_user_input() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
