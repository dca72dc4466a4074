use std::sync::Arc;

use catalog::IndexCache;

use super::{config::Config, utils::load_catalog};

pub struct State {
    pub config: Config,
    pub index: IndexCache,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let state = Self::from_config(Config::load());

        // warm the catalog so the first search does not pay for it
        load_catalog(state.clone()).await;

        state
    }

    pub fn from_config(config: Config) -> Arc<Self> {
        let index = IndexCache::new(config.foods_path.clone(), config.index_path.clone());

        Arc::new(Self { config, index })
    }
}
