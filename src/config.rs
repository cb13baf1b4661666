use std::{env, fmt::Display, str::FromStr};

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub seed_database: bool,
}

impl Config {
    /// Reads settings from the environment, after `.env` has been loaded
    pub fn load() -> Self {
        Self {
            database_url: try_load("DATABASE_URL", "spell_trainer.db".to_string()),
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:3000".to_string()),
            static_dir: try_load("STATIC_DIR", "dist".to_string()),
            seed_database: try_load("SEED_DATABASE", true),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        log::info!("{key} not set, using default: {default}");
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }
    }
}
