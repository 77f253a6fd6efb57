use std::fmt;
use thiserror::Error;
use tracing::info;

use doctor_cell::Doctor;
use patient_cell::Patient;
use shared_models::{Mailer, Notifiable, NotificationError, ScheduleChange};

use crate::services::pricing::{PaymentMethod, PriceBreakdown, PricingPolicy};

pub const UNCONFIRMED_DATE_TIME: &str = "A confirmar";

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("A patient is required to create an appointment")]
    MissingPatient,

    #[error("A doctor is required to create an appointment")]
    MissingDoctor,

    #[error("Schedule change notification failed: {0}")]
    Notification(#[from] NotificationError),
}

/// A booking ("turno") between a patient and a doctor.
///
/// The price is recomputed from the doctor's specialty and the patient's
/// insurance plan on every read unless one was fixed at build time.
pub struct Appointment<'a> {
    patient: &'a Patient,
    doctor: &'a Doctor,
    date_time: String,
    price_override: Option<f64>,
    payment_method: PaymentMethod,
    pricing: PricingPolicy,
    mailer: &'a dyn Mailer,
}

impl<'a> Appointment<'a> {
    pub fn new(
        patient: &'a Patient,
        doctor: &'a Doctor,
        date_time: impl Into<String>,
        mailer: &'a dyn Mailer,
    ) -> Self {
        Self {
            patient,
            doctor,
            date_time: date_time.into(),
            price_override: None,
            payment_method: PaymentMethod::default(),
            pricing: PricingPolicy::standard(),
            mailer,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price_override = Some(price);
        self
    }

    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn patient(&self) -> &'a Patient {
        self.patient
    }

    pub fn doctor(&self) -> &'a Doctor {
        self.doctor
    }

    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn has_fixed_price(&self) -> bool {
        self.price_override.is_some()
    }

    pub fn price_breakdown(&self) -> PriceBreakdown {
        self.pricing.breakdown(
            &self.doctor.specialty,
            &self.patient.insurance_plan,
            self.payment_method,
        )
    }

    pub fn total_price(&self) -> f64 {
        self.price_override
            .unwrap_or_else(|| self.price_breakdown().total)
    }

    /// Moves the appointment and tells both parties, even when the new value
    /// equals the old one.
    pub fn set_date_time(&mut self, date_time: impl Into<String>) -> Result<(), AppointmentError> {
        let date_time = date_time.into();
        info!(
            "Rescheduling appointment for {} with {} from {} to {}",
            self.patient.name, self.doctor.name, self.date_time, date_time
        );
        self.date_time = date_time;
        self.notify_schedule_change()
    }

    /// Doctor first, then patient. Stops at the first failed delivery.
    pub fn notify_schedule_change(&self) -> Result<(), AppointmentError> {
        let change = self.schedule_change();
        let parties: [&dyn Notifiable; 2] = [self.doctor, self.patient];

        for party in parties {
            party.notify_schedule_change(&change, self.mailer)?;
        }

        Ok(())
    }

    fn schedule_change(&self) -> ScheduleChange {
        ScheduleChange {
            doctor: self.doctor.to_string(),
            patient: self.patient.to_string(),
            date_time: self.date_time.clone(),
        }
    }
}

impl fmt::Display for Appointment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turno para {} con {} el {} - ${:?}",
            self.patient,
            self.doctor,
            self.date_time,
            self.total_price()
        )
    }
}

impl fmt::Debug for Appointment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appointment")
            .field("patient", &self.patient.name)
            .field("doctor", &self.doctor.name)
            .field("date_time", &self.date_time)
            .field("price_override", &self.price_override)
            .field("payment_method", &self.payment_method)
            .finish_non_exhaustive()
    }
}
