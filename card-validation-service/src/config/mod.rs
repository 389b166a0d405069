use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct CardValidationConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

/// Which lookup backs the validation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// Checksum over the digits of the submitted number.
    Luhn,
    /// Issuer range and length rules on top of the checksum.
    Brand,
    /// Fixed allowlist; everything else is invalid.
    Static,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub valid_numbers: Vec<String>,
}

impl CardValidationConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let common_config = core_config::Config::load()?;

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let is_prod = environment == Environment::Prod;

        let backend: StoreBackend = get_env("CARD_STORE_BACKEND", Some("luhn"), is_prod)?
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let valid_numbers = match backend {
            StoreBackend::Static => parse_list(&get_env("CARD_STORE_VALID_NUMBERS", None, is_prod)?),
            StoreBackend::Luhn | StoreBackend::Brand => Vec::new(),
        };

        let config = CardValidationConfig {
            common: common_config,
            environment,
            service_name: get_env("SERVICE_NAME", Some("card-validation-service"), is_prod)?,
            service_version: get_env("SERVICE_VERSION", Some(env!("CARGO_PKG_VERSION")), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.trim().is_empty()),
            store: StoreConfig {
                backend,
                valid_numbers,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.store.backend == StoreBackend::Static && self.store.valid_numbers.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "CARD_STORE_VALID_NUMBERS must list at least one number for the static backend"
            )));
        }

        if self.service_name.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "SERVICE_NAME must not be empty"
            )));
        }

        Ok(())
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "luhn" => Ok(StoreBackend::Luhn),
            "brand" => Ok(StoreBackend::Brand),
            "static" => Ok(StoreBackend::Static),
            _ => Err(format!("Invalid card store backend: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(backend: StoreBackend, valid_numbers: Vec<String>) -> CardValidationConfig {
        CardValidationConfig {
            common: core_config::Config::default(),
            environment: Environment::Dev,
            service_name: "card-validation-service".to_string(),
            service_version: "test".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            store: StoreConfig {
                backend,
                valid_numbers,
            },
        }
    }

    #[test]
    fn parses_environment_case_insensitively() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Prod);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn parses_store_backend() {
        assert_eq!("luhn".parse::<StoreBackend>().unwrap(), StoreBackend::Luhn);
        assert_eq!("Static".parse::<StoreBackend>().unwrap(), StoreBackend::Static);
        assert_eq!("BRAND".parse::<StoreBackend>().unwrap(), StoreBackend::Brand);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn parse_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_list(" 3379 5135 6110 8795 ,, 4111111111111111,"),
            vec!["3379 5135 6110 8795", "4111111111111111"]
        );
    }

    #[test]
    fn static_backend_requires_numbers() {
        assert!(config_with(StoreBackend::Static, Vec::new()).validate().is_err());
        assert!(
            config_with(StoreBackend::Static, vec!["4111111111111111".to_string()])
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn luhn_backend_needs_no_numbers() {
        assert!(config_with(StoreBackend::Luhn, Vec::new()).validate().is_ok());
    }

    #[test]
    fn get_env_uses_default_outside_prod() {
        let value = get_env("CARD_VALIDATION_TEST_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
        assert!(get_env("CARD_VALIDATION_TEST_UNSET_KEY", Some("fallback"), true).is_err());
        assert!(get_env("CARD_VALIDATION_TEST_UNSET_KEY", None, false).is_err());
    }
}
