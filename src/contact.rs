use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;

use crate::error::{ObraError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    pub sent_at: String,
}

/// Validates and assembles a message. Name and message must be non-empty
/// after trimming; the address needs text on both sides of an '@'.
pub fn compose(name: &str, email: &str, message: &str) -> Result<ContactMessage> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err(ObraError::InvalidContact("name is required".to_string()));
    }
    if !is_plausible_email(email) {
        return Err(ObraError::InvalidContact(format!(
            "not an email address: {email}"
        )));
    }
    if message.is_empty() {
        return Err(ObraError::InvalidContact("message is required".to_string()));
    }
    Ok(ContactMessage {
        from_name: name.to_string(),
        reply_to: email.to_string(),
        message: message.to_string(),
        sent_at: Local::now().to_rfc3339(),
    })
}

fn is_plausible_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((user, host)) => !user.is_empty() && !host.is_empty() && !s.contains(' '),
        None => false,
    }
}

/// The seam where a mail service would plug in. The shipped implementation
/// drops messages into a local outbox directory for later dispatch.
pub trait ContactDelivery {
    fn deliver(&self, msg: &ContactMessage) -> Result<PathBuf>;
}

pub struct Outbox {
    dir: PathBuf,
}

impl Outbox {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ContactDelivery for Outbox {
    fn deliver(&self, msg: &ContactMessage) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = self.dir.join(format!("msg-{stamp}-{}.json", slug(&msg.from_name)));
        let json = serde_json::to_string_pretty(msg)?;
        std::fs::write(&path, format!("{json}\n"))?;
        Ok(path)
    }
}

fn slug(name: &str) -> String {
    let mut out = String::new();
    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}
