use std::cell::RefCell;
use std::io;

use shared_models::{Mail, Mailer, NotificationError};

/// Keeps every mail in send order instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: RefCell<Vec<Mail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Mail> {
        self.sent.borrow().clone()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|mail| mail.to.clone()).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.sent.borrow().iter().map(ToString::to_string).collect()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, mail: &Mail) -> Result<(), NotificationError> {
        self.sent.borrow_mut().push(mail.clone());
        Ok(())
    }
}

/// Rejects mail for one address and records the rest.
#[derive(Debug)]
pub struct FailingMailer {
    pub reject: String,
    pub inner: RecordingMailer,
}

impl FailingMailer {
    pub fn rejecting(address: &str) -> Self {
        Self {
            reject: address.to_string(),
            inner: RecordingMailer::new(),
        }
    }
}

impl Mailer for FailingMailer {
    fn send(&self, mail: &Mail) -> Result<(), NotificationError> {
        if mail.to == self.reject {
            return Err(NotificationError::Delivery {
                to: mail.to.clone(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "mailbox unavailable"),
            });
        }
        self.inner.send(mail)
    }
}
