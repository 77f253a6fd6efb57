use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use shared_models::{Notifiable, ScheduleChange, Specialty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: Specialty,
    pub email: String,
}

impl Doctor {
    pub fn new(name: impl Into<String>, specialty: Specialty, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            specialty,
            email: email.into(),
        }
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.specialty)
    }
}

impl Notifiable for Doctor {
    fn email(&self) -> &str {
        &self.email
    }

    fn schedule_change_body(&self, change: &ScheduleChange) -> String {
        debug!("Notifying doctor {} of reschedule", self.id);
        format!(
            "El turno para {} se ha cambiado a {}",
            change.patient, change.date_time
        )
    }
}
