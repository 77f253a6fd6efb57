use std::cell::RefCell;
use std::io::Write;

use anyhow::Context;
use tracing::error;

use appointment_cell::{AppointmentBuilder, PaymentMethod};
use doctor_cell::DoctorDirectory;
use patient_cell::Patient;
use shared_config::AppConfig;
use shared_models::WriterMailer;

/// Books the demo appointment and reschedules it. Narrative and mail share `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let out = RefCell::new(out);

    {
        let mut out = out.borrow_mut();
        writeln!(out)?;
        writeln!(out, "Turnos Medicos")?;
        writeln!(out, "=============")?;
        writeln!(out)?;
    }

    let directory = DoctorDirectory::instance();

    let patient = Patient::new("Ignacio Segovia", "OSDE", "isegovia@gmail.com");

    let doctor = match directory.require_doctor(&config.specialty) {
        Ok(doctor) => doctor,
        Err(err) => {
            writeln!(out.borrow_mut(), "{}", err)?;
            error!("Cannot book without a doctor, stopping");
            return Err(err.into());
        }
    };

    let mailer = WriterMailer::new(&out);

    let mut appointment = AppointmentBuilder::new()
        .patient(&patient)
        .doctor(doctor)
        .date_time("2025-01-01 10:00")
        .payment_method(PaymentMethod::parse(&config.payment_method))
        .mailer(&mailer)
        .build()
        .context("Failed to create appointment")?;

    writeln!(out.borrow_mut(), "{}", appointment)?;

    appointment
        .set_date_time("2025-01-01 11:00")
        .context("Failed to notify schedule change")?;

    writeln!(out.borrow_mut())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctor_cell::DirectoryError;

    fn run_to_string(config: &AppConfig) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = run(config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_config_prints_full_narrative() {
        let (result, output) = run_to_string(&AppConfig::default());

        assert!(result.is_ok());
        assert_eq!(
            output,
            "\n\
             Turnos Medicos\n\
             =============\n\
             \n\
             Turno para Ignacio Segovia (OSDE) con Dra. Girgenti Ana (Cardiología > General) el 2025-01-01 10:00 - $0.0\n\
             Mail para agirgenti@gmail.com: El turno para Ignacio Segovia (OSDE) se ha cambiado a 2025-01-01 11:00\n\
             Mail para isegovia@gmail.com: El turno con Dra. Girgenti Ana (Cardiología > General) se ha cambiado a 2025-01-01 11:00\n\
             \n"
        );
    }

    #[test]
    fn test_unknown_specialty_stops_after_not_found_line() {
        let config = AppConfig {
            specialty: "NoExiste".to_string(),
            ..AppConfig::default()
        };

        let (result, output) = run_to_string(&config);

        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<DirectoryError>(),
            Some(&DirectoryError::DoctorNotFound {
                specialty: "NoExiste".to_string()
            })
        );
        assert_eq!(
            output,
            "\nTurnos Medicos\n=============\n\nNo se encontró el doctor para la especialidad: NoExiste\n"
        );
    }

    #[test]
    fn test_card_payment_is_reflected_in_price() {
        let config = AppConfig {
            specialty: "Neumonología".to_string(),
            payment_method: "tarjeta".to_string(),
        };

        let (result, output) = run_to_string(&config);

        assert!(result.is_ok());
        assert!(output.contains(
            "Turno para Ignacio Segovia (OSDE) con Dr. Jorge Gutierrez (Neumonología > General) el 2025-01-01 10:00 - $5880.0\n"
        ));
    }
}
