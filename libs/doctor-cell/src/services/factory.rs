use serde::{Deserialize, Serialize};

use shared_models::Specialty;

use crate::models::Doctor;

/// Clinical roles with a preset specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoctorRole {
    GeneralCardiologist,
    Pulmonologist,
    Allergist,
    GeneralKinesiologist,
    Traumatologist,
    GeneralPractitioner,
}

impl DoctorRole {
    pub const ALL: [DoctorRole; 6] = [
        DoctorRole::GeneralCardiologist,
        DoctorRole::Pulmonologist,
        DoctorRole::Allergist,
        DoctorRole::GeneralKinesiologist,
        DoctorRole::Traumatologist,
        DoctorRole::GeneralPractitioner,
    ];

    pub fn specialty(&self) -> &'static str {
        match self {
            DoctorRole::GeneralCardiologist => "Cardiología > General",
            DoctorRole::Pulmonologist => "Neumonología > General",
            DoctorRole::Allergist => "Neumonología > Alergias",
            DoctorRole::GeneralKinesiologist => "Kinesiología > General",
            DoctorRole::Traumatologist => "Kinesiología > Traumatología",
            DoctorRole::GeneralPractitioner => "Clínica > General",
        }
    }
}

pub struct DoctorFactory;

impl DoctorFactory {
    pub fn create(role: DoctorRole, name: &str, email: &str) -> Doctor {
        Doctor::new(name, Specialty::new(role.specialty()), email)
    }

    pub fn general_cardiologist(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::GeneralCardiologist, name, email)
    }

    pub fn pulmonologist(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::Pulmonologist, name, email)
    }

    pub fn allergist(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::Allergist, name, email)
    }

    pub fn general_kinesiologist(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::GeneralKinesiologist, name, email)
    }

    pub fn traumatologist(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::Traumatologist, name, email)
    }

    pub fn general_practitioner(name: &str, email: &str) -> Doctor {
        Self::create(DoctorRole::GeneralPractitioner, name, email)
    }
}
