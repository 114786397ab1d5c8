mod app;
mod cipher;
mod config;
mod error;
mod file;
mod header;
mod processor;
mod secret;
mod stream;
mod types;
mod ui;

use crate::app::App;

fn main() -> anyhow::Result<()> {
    App::init()?.execute()
}
