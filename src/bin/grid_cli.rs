//! CLI tool for webgrid - dumps the sample grid as JSON
//!
//! Usage:
//!   grid_cli                  # Full sample grid to stdout
//!   grid_cli <query>          # Only rows matching the filter query

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};

use webgrid::state::GridState;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut state = GridState::sample();
    if let Some(query) = args.get(1) {
        state.set_filter(query);
    }

    let json = match serde_json::to_string_pretty(&state.visible_snapshot()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    io::stdout().write_all(json.as_bytes()).unwrap();
    println!();
}
