//! Configuration validation.

use crate::config::{Config, DownSampleConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_down_sample(&config.down_sample)?;
    Ok(())
}

/// Validate down-sampling settings.
fn validate_down_sample(down_sample: &DownSampleConfig) -> Result<()> {
    if down_sample.factor == 0 {
        return Err(Error::ConfigValidation {
            message: "down_sample.factor must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_factor_is_rejected() {
        let config = Config {
            down_sample: DownSampleConfig { factor: 0 },
            ..Config::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
