//! Ledger configuration.

use chrono::Duration;

/// Ledger configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Default look-ahead for the expiring-soon view, in days.
    pub expiring_soon_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: 3,
        }
    }
}

impl LedgerConfig {
    /// Default horizon as a duration.
    pub fn expiring_soon_horizon(&self) -> Duration {
        Duration::days(i64::from(self.expiring_soon_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_horizon_is_three_days() {
        let config = LedgerConfig::default();
        assert_eq!(config.expiring_soon_horizon(), Duration::days(3));
    }
}
