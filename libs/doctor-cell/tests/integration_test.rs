use std::thread;

use assert_matches::assert_matches;

use doctor_cell::{DirectoryError, DoctorDirectory};
use shared_models::{Notifiable, ScheduleChange};
use shared_utils::test_utils::RecordingMailer;

#[test]
fn test_instance_is_shared() {
    let first = DoctorDirectory::instance();
    let second = DoctorDirectory::instance();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_instance_is_shared_across_threads() {
    let addresses: Vec<usize> = (0..4)
        .map(|_| thread::spawn(|| DoctorDirectory::instance() as *const DoctorDirectory as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let local = DoctorDirectory::instance() as *const DoctorDirectory as usize;
    assert!(addresses.iter().all(|address| *address == local));
}

#[test]
fn test_default_roster_order() {
    let directory = DoctorDirectory::instance();

    let roster: Vec<(&str, &str)> = directory
        .doctors()
        .iter()
        .map(|doctor| (doctor.name.as_str(), doctor.specialty.description()))
        .collect();

    assert_eq!(
        roster,
        vec![
            ("Dra. Girgenti Ana", "Cardiología > General"),
            ("Dr. Jorge Gutierrez", "Neumonología > General"),
            ("Dra. Florencia Aranda", "Neumonología > Alergias"),
            ("Dr. Esteban Quiroga", "Clínica > General"),
            ("Dr. Mario Gómez", "Kinesiología > Traumatología"),
        ]
    );
}

#[test]
fn test_get_doctor_by_specialty() {
    let directory = DoctorDirectory::instance();

    let cardiologist = directory.get_doctor("Cardiología").unwrap();
    assert_eq!(cardiologist.name, "Dra. Girgenti Ana");
    assert_eq!(cardiologist.email, "agirgenti@gmail.com");

    assert!(directory.get_doctor("NoExiste").is_none());
}

#[test]
fn test_require_doctor_reports_missing_specialty() {
    let directory = DoctorDirectory::instance();

    assert!(directory.require_doctor("Traumatología").is_ok());

    let err = directory.require_doctor("NoExiste").unwrap_err();
    assert_matches!(&err, DirectoryError::DoctorNotFound { specialty } if specialty == "NoExiste");
    assert_eq!(
        err.to_string(),
        "No se encontró el doctor para la especialidad: NoExiste"
    );
}

#[test]
fn test_roster_doctors_are_distinct_entities() {
    let directory = DoctorDirectory::with_default_roster();
    let other = DoctorDirectory::with_default_roster();

    assert_ne!(directory.doctors()[0].id, other.doctors()[0].id);
    assert_eq!(directory.doctors()[0].name, other.doctors()[0].name);
}

#[test]
fn test_doctor_notification_mentions_patient() {
    let doctor = DoctorDirectory::instance().get_doctor("Cardiología").unwrap();
    let mailer = RecordingMailer::new();
    let change = ScheduleChange {
        doctor: doctor.to_string(),
        patient: "Ignacio Segovia (OSDE)".to_string(),
        date_time: "2025-01-01 11:00".to_string(),
    };

    doctor.notify_schedule_change(&change, &mailer).unwrap();

    assert_eq!(
        mailer.lines(),
        vec!["Mail para agirgenti@gmail.com: El turno para Ignacio Segovia (OSDE) se ha cambiado a 2025-01-01 11:00"]
    );
}

#[test]
fn test_doctor_serialization() {
    let doctor = DoctorDirectory::instance().get_doctor("Clínica").unwrap();
    let json = serde_json::to_value(doctor).unwrap();

    assert_eq!(json["name"], "Dr. Esteban Quiroga");
    assert_eq!(json["specialty"], "Clínica > General");
}
