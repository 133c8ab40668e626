use config::{ConfigError, Environment};
use serde::Deserialize;

// Главная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallPreset,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

// Заранее заданные размеры зала. Если заданы оба, размеры не спрашиваются
#[derive(Debug, Clone, Copy, Default)]
pub struct HallPreset {
    pub rows: Option<i32>,
    pub seats_per_row: Option<i32>,
}

impl HallPreset {
    pub fn dimensions(&self) -> Option<(i32, i32)> {
        Some((self.rows?, self.seats_per_row?))
    }
}

// Переменные окружения в том виде, в каком их отдает config
#[derive(Debug, Deserialize)]
struct EnvSettings {
    rust_log: String,
    log_format: LogFormat,
    cinema_rows: Option<i32>,
    cinema_seats_per_row: Option<i32>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default().try_parsing(true))
    }

    fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .set_default("rust_log", "cinema=warn")?
            .set_default("log_format", "plain")?
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(Config {
            app: AppConfig {
                rust_log: settings.rust_log,
                log_format: settings.log_format,
            },
            hall: HallPreset {
                rows: settings.cinema_rows,
                seats_per_row: settings.cinema_seats_per_row,
            },
        })
    }
}
