use rota_config::RotaConfig;
use rota_core::month::YearMonth;
use rota_engine::{AssignmentEngine, RngSource, fresh_seed};
use rota_store::JsonFileProfileRepository;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: RotaConfig,
    pub repo: JsonFileProfileRepository,
}

impl AppContext {
    pub fn init(config: RotaConfig) -> Self {
        let path = config.storage.resolved_profiles_path();
        tracing::debug!(path = %path.display(), "using profile store");
        Self {
            repo: JsonFileProfileRepository::new(path),
            config,
        }
    }

    /// Engine over the stored roster with `month` already generated, plus
    /// the seed it was generated from.
    ///
    /// Uses `schedule.seed` when set. Otherwise a fresh seed is drawn, so
    /// passing the returned seed back via `--seed` replays the same schedule.
    pub fn engine_for(&self, month: YearMonth) -> (AssignmentEngine<JsonFileProfileRepository>, u64) {
        let seed = self.config.schedule.seed.unwrap_or_else(fresh_seed);
        tracing::debug!(seed, %month, "generating default schedule");
        let mut engine = AssignmentEngine::with_random(self.repo.clone(), RngSource::seeded(seed));
        engine.select_month(month);
        (engine, seed)
    }

    pub fn placeholder(&self) -> &str {
        &self.config.general.placeholder_label
    }
}
