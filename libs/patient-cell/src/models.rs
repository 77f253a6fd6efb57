use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shared_models::{Notifiable, ScheduleChange};

/// Health insurance plan ("obra social"). Recognition is exact and case
/// sensitive; anything else is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsurancePlan {
    Osde,
    Ioma,
    Pami,
    Other(String),
}

impl InsurancePlan {
    pub fn parse(value: &str) -> Self {
        match value {
            "OSDE" => InsurancePlan::Osde,
            "IOMA" => InsurancePlan::Ioma,
            "PAMI" => InsurancePlan::Pami,
            other => InsurancePlan::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InsurancePlan::Osde => "OSDE",
            InsurancePlan::Ioma => "IOMA",
            InsurancePlan::Pami => "PAMI",
            InsurancePlan::Other(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, InsurancePlan::Other(_))
    }
}

impl From<String> for InsurancePlan {
    fn from(value: String) -> Self {
        InsurancePlan::parse(&value)
    }
}

impl From<&str> for InsurancePlan {
    fn from(value: &str) -> Self {
        InsurancePlan::parse(value)
    }
}

impl From<InsurancePlan> for String {
    fn from(plan: InsurancePlan) -> Self {
        plan.name().to_string()
    }
}

impl fmt::Display for InsurancePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub insurance_plan: InsurancePlan,
    pub email: String,
}

impl Patient {
    pub fn new(
        name: impl Into<String>,
        insurance_plan: impl Into<InsurancePlan>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            insurance_plan: insurance_plan.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.insurance_plan)
    }
}

impl Notifiable for Patient {
    fn email(&self) -> &str {
        &self.email
    }

    fn schedule_change_body(&self, change: &ScheduleChange) -> String {
        debug!("Notifying patient {} of reschedule", self.id);
        format!(
            "El turno con {} se ha cambiado a {}",
            change.doctor, change.date_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_plans() {
        assert_eq!(InsurancePlan::parse("OSDE"), InsurancePlan::Osde);
        assert_eq!(InsurancePlan::parse("IOMA"), InsurancePlan::Ioma);
        assert_eq!(InsurancePlan::parse("PAMI"), InsurancePlan::Pami);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(InsurancePlan::parse("osde"), InsurancePlan::Other("osde".to_string()));
        assert_eq!(InsurancePlan::parse(" PAMI"), InsurancePlan::Other(" PAMI".to_string()));
        assert!(!InsurancePlan::parse("").is_recognized());
        assert_eq!(InsurancePlan::parse("").to_string(), "");
    }

    #[test]
    fn test_patient_display() {
        let patient = Patient::new("Ignacio Segovia", "OSDE", "isegovia@gmail.com");
        assert_eq!(patient.to_string(), "Ignacio Segovia (OSDE)");

        let uninsured = Patient::new("Juan Pérez", "Swiss Medical", "jperez@gmail.com");
        assert_eq!(uninsured.to_string(), "Juan Pérez (Swiss Medical)");
    }
}
