use anyhow::Context;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
}

/// Defaults, then `config/dashboard.{toml,..}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from(CONFIG_FILE, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

pub fn load_dashboard_config_from(
    file: &str,
    env: config::Environment,
) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050)?
        .set_default("dataset.path", "spacex_launch_dash.csv")?
        .set_default("debug", false)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(env)
        .build()
        .context("Failed to assemble dashboard configuration")?;

    settings
        .try_deserialize()
        .context("Invalid dashboard configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_dashboard_config_from("config/does-not-exist", env_with(&[])).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dataset.path, "spacex_launch_dash.csv");
        assert!(!config.debug);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            "debug = true\n[server]\nport = 9000\n[dataset]\npath = \"data/launches.csv\"\n",
        );

        let path = file.path().to_str().unwrap();
        let config = load_dashboard_config_from(path, env_with(&[])).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path, "data/launches.csv");
        assert!(config.debug);
    }

    #[test]
    fn test_environment_overrides_file_and_defaults() {
        let file = write_config("debug = false\n[server]\nport = 9000\n");
        let env = env_with(&[
            ("DASHBOARD__SERVER__PORT", "9100"),
            ("DASHBOARD__DEBUG", "true"),
            ("DASHBOARD__DATASET__PATH", "/srv/launches.csv"),
            ("OTHER__SERVER__PORT", "1"),
        ]);

        let path = file.path().to_str().unwrap();
        let config = load_dashboard_config_from(path, env).unwrap();
        assert_eq!(config.server.port, 9100);
        assert!(config.debug);
        assert_eq!(config.dataset.path, "/srv/launches.csv");
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
