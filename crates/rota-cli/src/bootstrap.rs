use anyhow::Context;
use rota_config::RotaConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then let command-line flags win.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RotaConfig> {
    let config = RotaConfig::load_with_dotenv().context("failed to load rota configuration")?;
    Ok(apply_flags(config, flags))
}

fn apply_flags(mut config: RotaConfig, flags: &GlobalFlags) -> RotaConfig {
    if let Some(store) = &flags.store {
        config.storage.profiles_path = store.display().to_string();
    }
    if flags.seed.is_some() {
        config.schedule.seed = flags.seed;
    }
    config
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(store: Option<&str>, seed: Option<u64>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            store: store.map(PathBuf::from),
            seed,
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = RotaConfig::default();
        config.schedule.seed = Some(1);

        let config = apply_flags(config, &flags(Some("/tmp/roster.json"), Some(9)));
        assert_eq!(config.schedule.seed, Some(9));
        assert_eq!(
            config.storage.resolved_profiles_path(),
            PathBuf::from("/tmp/roster.json")
        );
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = RotaConfig::default();
        config.schedule.seed = Some(1);
        config.storage.profiles_path = "team.json".into();

        let config = apply_flags(config, &flags(None, None));
        assert_eq!(config.schedule.seed, Some(1));
        assert_eq!(config.storage.profiles_path, "team.json");
    }
}
