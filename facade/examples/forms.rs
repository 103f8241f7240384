//! Form demo: click a field to focus it, type to edit, click the
//! checkbox to toggle, then submit to validate.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use facade::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RuntimeError> {
    let log_file = File::create("forms.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let preset = find_preset("form/default").expect("preset registered");
    Runtime::run((preset.build)()?).await
}
