use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// Outgoing mail produced when an appointment is rescheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: String,
    pub body: String,
}

impl Mail {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mail para {}: {}", self.to, self.body)
    }
}

/// Snapshot of a rescheduled appointment, rendered from the appointment's
/// own point of view so each party can describe its counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleChange {
    pub doctor: String,
    pub patient: String,
    pub date_time: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to deliver mail to {to}")]
    Delivery {
        to: String,
        #[source]
        source: io::Error,
    },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Mailer {
    fn send(&self, mail: &Mail) -> Result<(), NotificationError>;
}

/// Writes each mail as a line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMailer;

impl Mailer for ConsoleMailer {
    fn send(&self, mail: &Mail) -> Result<(), NotificationError> {
        debug!("Delivering schedule change mail to {}", mail.to);

        writeln!(io::stdout().lock(), "{}", mail).map_err(|source| NotificationError::Delivery {
            to: mail.to.clone(),
            source,
        })
    }
}

/// Writes each mail as a line on a shared writer, interleaved with whatever
/// else the owner of the `RefCell` writes there.
pub struct WriterMailer<'w, W: Write> {
    out: &'w RefCell<W>,
}

impl<'w, W: Write> WriterMailer<'w, W> {
    pub fn new(out: &'w RefCell<W>) -> Self {
        Self { out }
    }
}

impl<W: Write> Mailer for WriterMailer<'_, W> {
    fn send(&self, mail: &Mail) -> Result<(), NotificationError> {
        debug!("Delivering schedule change mail to {}", mail.to);

        writeln!(self.out.borrow_mut(), "{}", mail).map_err(|source| NotificationError::Delivery {
            to: mail.to.clone(),
            source,
        })
    }
}

/// Anything that must hear about a schedule change. Doctors and patients
/// word the same event differently.
pub trait Notifiable {
    fn email(&self) -> &str;

    fn schedule_change_body(&self, change: &ScheduleChange) -> String;

    fn notify_schedule_change(
        &self,
        change: &ScheduleChange,
        mailer: &dyn Mailer,
    ) -> Result<(), NotificationError> {
        let mail = Mail::new(self.email(), self.schedule_change_body(change));
        mailer.send(&mail)
    }
}
