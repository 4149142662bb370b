use crate::independence_checker::*;

pub const DEFAULT_HOST : &str = "0.0.0.0";
pub const DEFAULT_PORT : u16 = 5000;
pub const DEFAULT_MAX_JSON_BYTES : usize = 1 << 20;

///Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host : String,
    pub port : u16,
    ///Number of actix workers; `None` uses one per core
    pub workers : Option<usize>,
    pub determinant_policy : DeterminantPolicy,
    pub max_json_bytes : usize
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host : DEFAULT_HOST.to_string(),
            port : DEFAULT_PORT,
            workers : None,
            determinant_policy : DeterminantPolicy::default(),
            max_json_bytes : DEFAULT_MAX_JSON_BYTES
        }
    }
}

impl ServerConfig {
    ///Load from environment variables.
    pub fn from_env() -> Self {
        ServerConfig::from_lookup(|key| std::env::var(key).ok())
    }

    ///Builds a config from any key lookup, falling back to defaults for
    ///missing or unparseable values.
    pub fn from_lookup<L>(lookup : L) -> Self where L : Fn(&str) -> Option<String> {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("ORTHOBASIS_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("ORTHOBASIS_PORT") {
            config.port = parse_or_warn("ORTHOBASIS_PORT", &port, DEFAULT_PORT);
        }
        if let Some(workers) = lookup("ORTHOBASIS_WORKERS") {
            match workers.trim().parse::<usize>() {
                Ok(count) if count > 0 => config.workers = Some(count),
                _ => warn!("Ignoring ORTHOBASIS_WORKERS={:?}, expected a positive integer", workers)
            }
        }
        if let Some(policy) = lookup("ORTHOBASIS_DETERMINANT_POLICY") {
            match DeterminantPolicy::parse(&policy) {
                Some(policy) => config.determinant_policy = policy,
                None => warn!("Unknown determinant policy {:?}, keeping {:?}",
                              policy, config.determinant_policy)
            }
        }
        if let Some(bytes) = lookup("ORTHOBASIS_MAX_JSON_BYTES") {
            config.max_json_bytes = parse_or_warn("ORTHOBASIS_MAX_JSON_BYTES", &bytes, DEFAULT_MAX_JSON_BYTES);
        }

        config
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or_warn<T>(key : &str, value : &str, default : T) -> T
    where T : std::str::FromStr + std::fmt::Debug {
    match value.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Could not parse {}={:?}, using {:?}", key, value, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs : &[(&str, &str)]) -> ServerConfig {
        let vars : HashMap<String, String> = pairs.iter()
                                                  .map(|(k, v)| (k.to_string(), v.to_string()))
                                                  .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let config = config_from(&[]);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
        assert_eq!(config.determinant_policy, DeterminantPolicy::TruncateToInteger);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[("ORTHOBASIS_HOST", "127.0.0.1"),
                                   ("ORTHOBASIS_PORT", "8081"),
                                   ("ORTHOBASIS_WORKERS", "2"),
                                   ("ORTHOBASIS_DETERMINANT_POLICY", "exact"),
                                   ("ORTHOBASIS_MAX_JSON_BYTES", "4096")]);
        assert_eq!(config.listen_addr(), "127.0.0.1:8081");
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.determinant_policy, DeterminantPolicy::Exact);
        assert_eq!(config.max_json_bytes, 4096);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[("ORTHOBASIS_PORT", "not-a-port"),
                                   ("ORTHOBASIS_WORKERS", "0"),
                                   ("ORTHOBASIS_DETERMINANT_POLICY", "round")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.workers, None);
        assert_eq!(config.determinant_policy, DeterminantPolicy::TruncateToInteger);
    }
}
