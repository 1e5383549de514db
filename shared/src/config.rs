use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Site-wide tunables. Every key is optional when parsed from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency of login and register
    pub auth_delay_ms: u32,
    /// Simulated latency of saving wallet edits
    pub save_delay_ms: u32,
    /// Simulated latency of deleting a wallet
    pub delete_delay_ms: u32,
    /// Simulated latency of sending the contact form
    pub contact_delay_ms: u32,
    /// How long the deposit dialog shows "Copied!"
    pub copied_reset_ms: u32,
    /// Viewports narrower than this use the mobile drawer layout
    pub mobile_breakpoint_px: u32,
    /// Public QR image generator; the address is passed as `data`
    pub qr_endpoint: String,
    pub qr_size_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: 800,
            save_delay_ms: 600,
            delete_delay_ms: 600,
            contact_delay_ms: 700,
            copied_reset_ms: 2000,
            mobile_breakpoint_px: 768,
            qr_endpoint: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            qr_size_px: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json).context("Failed to parse site config JSON")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.mobile_breakpoint_px == 0 {
            bail!("mobile_breakpoint_px must be greater than zero");
        }
        url::Url::parse(&self.qr_endpoint)
            .with_context(|| format!("qr_endpoint is not a valid URL: {:?}", self.qr_endpoint))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "auth_delay_ms": 10 }"#).unwrap();
        assert_eq!(config.auth_delay_ms, 10);
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert_eq!(config.qr_endpoint, AppConfig::default().qr_endpoint);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(AppConfig::from_json("not json").is_err());
        assert!(AppConfig::from_json(r#"{ "mobile_breakpoint_px": 0 }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "qr_endpoint": " " }"#).is_err());
    }
}
