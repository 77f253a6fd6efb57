use tracing::debug;

use doctor_cell::Doctor;
use patient_cell::Patient;
use shared_models::{ConsoleMailer, Mailer};

use crate::models::{Appointment, AppointmentError, UNCONFIRMED_DATE_TIME};
use crate::services::pricing::PaymentMethod;

static CONSOLE_MAILER: ConsoleMailer = ConsoleMailer;

/// Assembles an [`Appointment`]. Patient and doctor are mandatory; the date
/// defaults to "A confirmar", mail goes to stdout unless another mailer is set.
#[derive(Default)]
pub struct AppointmentBuilder<'a> {
    patient: Option<&'a Patient>,
    doctor: Option<&'a Doctor>,
    date_time: Option<String>,
    price: Option<f64>,
    payment_method: PaymentMethod,
    mailer: Option<&'a dyn Mailer>,
}

impl<'a> AppointmentBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient(mut self, patient: &'a Patient) -> Self {
        self.patient = Some(patient);
        self
    }

    pub fn doctor(mut self, doctor: &'a Doctor) -> Self {
        self.doctor = Some(doctor);
        self
    }

    pub fn date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = Some(date_time.into());
        self
    }

    /// Fixes the price instead of deriving it from specialty and plan.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn mailer(mut self, mailer: &'a dyn Mailer) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn build(self) -> Result<Appointment<'a>, AppointmentError> {
        let patient = self.patient.ok_or(AppointmentError::MissingPatient)?;
        let doctor = self.doctor.ok_or(AppointmentError::MissingDoctor)?;
        let date_time = self
            .date_time
            .unwrap_or_else(|| UNCONFIRMED_DATE_TIME.to_string());
        let mailer = self.mailer.unwrap_or(&CONSOLE_MAILER);

        debug!("Building appointment for {} with {} at {}", patient.name, doctor.name, date_time);

        let appointment = Appointment::new(patient, doctor, date_time, mailer)
            .with_payment_method(self.payment_method);

        Ok(match self.price {
            Some(price) => appointment.with_price(price),
            None => appointment,
        })
    }
}
