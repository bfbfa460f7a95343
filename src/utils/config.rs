use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub restaurant_name: String,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            restaurant_name: env::var("RESTAURANT_NAME")
                .unwrap_or("Chicken Dust Express".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or("info".to_string()),
            environment: env::var("APP_ENV").unwrap_or("development".to_string()),
        };

        tracing::debug!(
            "Config: loaded for {} environment",
            config.environment
        );
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.restaurant_name.trim().is_empty() {
            return Err(anyhow::anyhow!("RESTAURANT_NAME must not be empty"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
