//! Preset gallery: list registered presets or run one by name.
//!
//! ```sh
//! cargo run --example gallery                      # list presets
//! cargo run --example gallery scroll-area/default  # run one
//! ```

use std::env;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use facade::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RuntimeError> {
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let Some(name) = env::args().nth(1) else {
        println!("Available presets:\n");
        for preset in registered_presets() {
            println!("  {:<24} {}", preset.name, preset.description);
        }
        println!("\nUsage: gallery <preset-name>   (press q to quit)");
        return Ok(());
    };

    let Some(preset) = find_preset(&name) else {
        eprintln!("unknown preset `{name}`");
        return Ok(());
    };

    let component = (preset.build)()?;
    Runtime::run(component).await
}
