use std::{env, fs::File, rc::Rc};

use anyhow::{Context, Result};
use recommender_core::{Catalog, Recommender, RecommenderConfig};

mod app;
mod state;
mod ui;

const LOG_FILE: &str = "recommender.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = match env::args().nth(1) {
        Some(path) => RecommenderConfig::load(&path)
            .with_context(|| format!("cannot load config '{path}'"))?,
        None => RecommenderConfig::default(),
    };

    let recommender = Recommender::from_config(Catalog::pcmb(), &config)?;
    app::run::run(Rc::new(recommender), config.top_n)
}

/// Installs `env_logger` when `RUST_LOG` is set, writing to a file so the
/// alternate screen stays clean.
fn init_logging() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).with_context(|| format!("cannot create '{LOG_FILE}'"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
