//! Environment-based configuration with defaults.
//! Used by: main, state.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub order_service_url: String,
    pub inventory_service_url: String,
    pub tracking_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_ms = get("UPSTREAM_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".into()),
            order_service_url: get("ORDER_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8081".into()),
            inventory_service_url: get("INVENTORY_SERVICE_URL")
                .unwrap_or_else(|| "http://localhost:8082".into()),
            tracking_url: get("TRACKING_URL")
                .unwrap_or_else(|| "https://analytics.service".into()),
            upstream_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        Config::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_when_env_empty() {
        let config = from_map(&[]);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.order_service_url, "http://localhost:8081");
        assert_eq!(config.inventory_service_url, "http://localhost:8082");
        assert_eq!(config.tracking_url, "https://analytics.service");
        assert_eq!(config.upstream_timeout, Duration::from_millis(5_000));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = from_map(&[
            ("BIND_ADDR", "127.0.0.1:9090"),
            ("ORDER_SERVICE_URL", "http://orders.internal"),
            ("UPSTREAM_TIMEOUT_MS", "250"),
        ]);
        assert_eq!(config.bind_addr, "127.0.0.1:9090");
        assert_eq!(config.order_service_url, "http://orders.internal");
        assert_eq!(config.upstream_timeout, Duration::from_millis(250));
    }

    #[test]
    fn unparseable_timeout_falls_back_to_default() {
        let config = from_map(&[("UPSTREAM_TIMEOUT_MS", "soon")]);
        assert_eq!(config.upstream_timeout, Duration::from_millis(5_000));
    }
}
