use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Populate `smart-meter-0` … `smart-meter-4` with generated readings at startup.
    pub seed_demo_meters: bool,
    /// Readings generated per demo meter.
    pub seed_readings_per_meter: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            seed_demo_meters: parse_flag(&optional("SEED_DEMO_METERS", "true"))
                .context("SEED_DEMO_METERS must be true or false")?,
            seed_readings_per_meter: optional("SEED_READINGS_PER_METER", "20")
                .parse()
                .context("SEED_READINGS_PER_METER must be a non-negative integer")?,
        })
    }
}

/// Accepts `true`/`false`, `1`/`0` and `yes`/`no`, case-insensitively.
fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean flag: {other:?}")),
    }
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
