use std::env;

/// Which store backs the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    /// Canned responses, nothing persisted
    #[default]
    Stateless,
    /// Keyed in-memory table
    Stateful,
}

impl std::fmt::Display for StoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreMode::Stateless => write!(f, "stateless"),
            StoreMode::Stateful => write!(f, "stateful"),
        }
    }
}

impl std::str::FromStr for StoreMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stateless" => Ok(StoreMode::Stateless),
            "stateful" => Ok(StoreMode::Stateful),
            _ => Err(format!("Unknown store mode: {}", s)),
        }
    }
}

/// How identifiers are generated on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    #[default]
    Random,
    Sequential,
}

impl std::fmt::Display for IdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdMode::Random => write!(f, "random"),
            IdMode::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for IdMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(IdMode::Random),
            "sequential" | "sequence" => Ok(IdMode::Sequential),
            _ => Err(format!("Unknown id mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub store_mode: StoreMode,
    pub id_mode: IdMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            store_mode: StoreMode::default(),
            id_mode: IdMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            bind_addr: env::var("FAKEAPI_BIND_ADDR").unwrap_or(defaults.bind_addr),
            store_mode: parse_or_default("FAKEAPI_STORE_MODE", env::var("FAKEAPI_STORE_MODE").ok()),
            id_mode: parse_or_default("FAKEAPI_ID_MODE", env::var("FAKEAPI_ID_MODE").ok()),
        }
    }
}

/// Parse an optional setting, warning and falling back to the default on bad input
fn parse_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: std::str::FromStr<Err = String> + Default + std::fmt::Display,
{
    match raw {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e: String| {
            let fallback = T::default();
            tracing::warn!(key, error = %e, %fallback, "Invalid setting, using default");
            fallback
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_mode_parsing() {
        assert_eq!("stateful".parse::<StoreMode>(), Ok(StoreMode::Stateful));
        assert_eq!(" Stateless ".parse::<StoreMode>(), Ok(StoreMode::Stateless));
        assert!("sometimes".parse::<StoreMode>().is_err());
    }

    #[test]
    fn id_mode_parsing() {
        assert_eq!("sequential".parse::<IdMode>(), Ok(IdMode::Sequential));
        assert_eq!("RANDOM".parse::<IdMode>(), Ok(IdMode::Random));
        assert!("uuid".parse::<IdMode>().is_err());
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(StoreMode::Stateful.to_string(), "stateful");
        assert_eq!(IdMode::Sequential.to_string(), "sequential");
    }

    #[test]
    fn parse_or_default_falls_back() {
        let mode: StoreMode = parse_or_default("FAKEAPI_STORE_MODE", Some("bogus".to_string()));
        assert_eq!(mode, StoreMode::Stateless);

        let mode: IdMode = parse_or_default("FAKEAPI_ID_MODE", Some("sequential".to_string()));
        assert_eq!(mode, IdMode::Sequential);

        let mode: IdMode = parse_or_default("FAKEAPI_ID_MODE", None);
        assert_eq!(mode, IdMode::Random);
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.store_mode, StoreMode::Stateless);
        assert_eq!(config.id_mode, IdMode::Random);
    }
}
