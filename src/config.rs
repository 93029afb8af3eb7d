use crate::error::AppError;
use std::env;

pub const DEFAULT_DATASET: &str = "campeonato-brasileiro-full.csv";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dataset: String,
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset = lookup("DASHBOARD_DATASET")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATASET.to_string());

        let top_n = match lookup("DASHBOARD_TOP_N") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::ConfigError(format!(
                    "DASHBOARD_TOP_N must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TOP_N,
        };

        if top_n == 0 {
            return Err(AppError::ConfigError(
                "DASHBOARD_TOP_N must be at least 1".to_string(),
            ));
        }

        Ok(Config { dataset, top_n })
    }
}
