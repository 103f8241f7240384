//! Drill-down navigation demo: click items with `›` to drill in,
//! `‹ Back` to drill out, `☰ Menu` to open and close.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use facade::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RuntimeError> {
    let log_file = File::create("nav_menu.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let preset = find_preset("nav-menu/default").expect("preset registered");
    Runtime::run((preset.build)()?).await
}
