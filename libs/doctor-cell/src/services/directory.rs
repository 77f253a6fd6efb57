use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::Doctor;
use crate::services::factory::DoctorFactory;

static INSTANCE: OnceLock<DoctorDirectory> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("No se encontró el doctor para la especialidad: {specialty}")]
    DoctorNotFound { specialty: String },
}

/// Read-only roster of doctors, searchable by specialty text.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The five doctors every clinic starts with.
    pub fn with_default_roster() -> Self {
        Self::new(vec![
            DoctorFactory::general_cardiologist("Dra. Girgenti Ana", "agirgenti@gmail.com"),
            DoctorFactory::pulmonologist("Dr. Jorge Gutierrez", "jgutierrez@gmail.com"),
            DoctorFactory::allergist("Dra. Florencia Aranda", "faranda@gmail.com"),
            DoctorFactory::general_practitioner("Dr. Esteban Quiroga", "equiroga@gmail.com"),
            DoctorFactory::traumatologist("Dr. Mario Gómez", "mgomez@gmail.com"),
        ])
    }

    /// Process-wide directory, populated with the default roster on first use.
    /// Initialisation runs exactly once even under concurrent first access.
    pub fn instance() -> &'static DoctorDirectory {
        INSTANCE.get_or_init(|| {
            let directory = Self::with_default_roster();
            info!("Doctor directory initialised with {} doctors", directory.doctors.len());
            directory
        })
    }

    /// Full roster in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// First doctor, in roster order, whose specialty contains `specialty`.
    pub fn get_doctor(&self, specialty: &str) -> Option<&Doctor> {
        let found = self
            .doctors
            .iter()
            .find(|doctor| doctor.specialty.contains(specialty));

        match found {
            Some(doctor) => debug!("Specialty {:?} matched {}", specialty, doctor.name),
            None => warn!("No doctor found for specialty {:?}", specialty),
        }

        found
    }

    pub fn require_doctor(&self, specialty: &str) -> Result<&Doctor, DirectoryError> {
        self.get_doctor(specialty)
            .ok_or_else(|| DirectoryError::DoctorNotFound {
                specialty: specialty.to_string(),
            })
    }
}
