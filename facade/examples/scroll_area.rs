//! Custom scrollbar demo: drag the knob, use the wheel, hover the bar.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use facade::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RuntimeError> {
    let log_file = File::create("scroll_area.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let preset = find_preset("scroll-area/auto-hide").expect("preset registered");
    Runtime::run((preset.build)()?).await
}
