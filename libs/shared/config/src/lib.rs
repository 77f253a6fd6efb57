use std::env;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_SPECIALTY: &str = "Cardiología";
pub const DEFAULT_PAYMENT_METHOD: &str = "EFECTIVO";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Specialty text the entry point looks a doctor up by.
    pub specialty: String,
    /// Raw payment method name, resolved by the appointment cell.
    pub payment_method: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            specialty: DEFAULT_SPECIALTY.to_string(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            specialty: read_var("TURNOS_SPECIALTY", defaults.specialty),
            payment_method: read_var("TURNOS_PAYMENT_METHOD", defaults.payment_method),
        };

        if !config.is_configured() {
            warn!("Specialty query is empty, doctor lookup will match the first roster entry");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.specialty.is_empty()
    }
}

fn read_var(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => default,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{} is not valid unicode, using default", key);
            default
        }
    }
}
