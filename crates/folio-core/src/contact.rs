use crate::error::{FolioError, Result};
use crate::io;
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ContactMessage
// ---------------------------------------------------------------------------

/// A visitor's message from the contact form. Stored in the inbox first,
/// then handed to the notifier; a notification failure never loses the
/// stored message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Build a validated draft. All three fields are required; the email
    /// gets a plausibility check, not RFC parsing.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        let message = message.into().trim().to_string();

        if name.is_empty() {
            return Err(FolioError::InvalidContact("name is required".into()));
        }
        if message.is_empty() {
            return Err(FolioError::InvalidContact("message is required".into()));
        }
        if email.is_empty() {
            return Err(FolioError::InvalidContact("email is required".into()));
        }
        let Some((local, domain)) = email.split_once('@') else {
            return Err(FolioError::InvalidContact(format!(
                "'{email}' is not an email address"
            )));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(FolioError::InvalidContact(format!(
                "'{email}' is not an email address"
            )));
        }

        Ok(Self {
            id: None,
            name,
            email,
            message,
            received_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// The outbound notification seam. The engine only knows that a submission
/// should be announced somewhere; what "somewhere" means is the
/// implementation's business.
pub trait Notifier {
    fn notify(&self, message: &ContactMessage) -> Result<()>;
}

/// Writes one YAML file per submission into `.folio/outbox/` for an
/// external mailer to drain. Filenames are the message id, so redelivery
/// is idempotent.
pub struct OutboxNotifier {
    outbox: PathBuf,
}

impl OutboxNotifier {
    pub fn new(root: &Path) -> Self {
        Self {
            outbox: paths::outbox_dir(root),
        }
    }
}

impl Notifier for OutboxNotifier {
    fn notify(&self, message: &ContactMessage) -> Result<()> {
        let id = message
            .id
            .map(|u| u.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let data = serde_yaml::to_string(message)?;
        io::atomic_write(&self.outbox.join(format!("{id}.yaml")), data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Inbox operations
// ---------------------------------------------------------------------------

/// Validate, store, and announce a submission. Returns the stored message.
pub fn submit(
    root: &Path,
    notifier: &dyn Notifier,
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactMessage> {
    let mut msg = ContactMessage::new(name, email, message)?;
    msg.id = Some(Uuid::new_v4());

    let mut inbox = list(root)?;
    inbox.push(msg.clone());
    save(root, &inbox)?;

    if let Err(e) = notifier.notify(&msg) {
        tracing::warn!("contact notification failed (message kept): {e}");
    }
    Ok(msg)
}

/// All stored messages, newest first.
pub fn list(root: &Path) -> Result<Vec<ContactMessage>> {
    let path = paths::messages_path(root);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(&path)?;
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut messages: Vec<ContactMessage> = serde_yaml::from_str(&data)?;
    messages.sort_by(|a, b| b.received_at.cmp(&a.received_at));
    Ok(messages)
}

pub fn delete(root: &Path, id: Uuid) -> Result<()> {
    let mut messages = list(root)?;
    let before = messages.len();
    messages.retain(|m| m.id != Some(id));
    if messages.len() == before {
        return Err(FolioError::RecordNotFound(id.to_string()));
    }
    save(root, &messages)
}

fn save(root: &Path, messages: &[ContactMessage]) -> Result<()> {
    let data = serde_yaml::to_string(messages)?;
    io::atomic_write(&paths::messages_path(root), data.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
