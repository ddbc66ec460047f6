//! Transcript model: the ordered chat history and the interactive item cards.
//!
//! The transcript is append-only except for placeholder resolution: each
//! submission inserts one pending entry tagged with its [`SubmissionId`], and
//! the eventual outcome replaces that entry in place. Tracking placeholders by
//! id (rather than by index or reference) keeps overlapping submissions
//! independent even when their responses arrive out of order.

use chrono::{DateTime, Local};

use shared::{domain::SubmissionId, protocol::ItemSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryBody {
    Text(String),
    Pending(SubmissionId),
    TaskResult {
        task_name: String,
        cards: Vec<ItemCard>,
    },
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub origin: Origin,
    pub sent_at: DateTime<Local>,
    pub body: EntryBody,
}

/// One interactive product card. The stepper value is owned by the card and is
/// pure display state; it is never reported back to the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    name: String,
    amount: String,
    quantity: u32,
}

impl ItemCard {
    pub fn from_spec(spec: &ItemSpec) -> Self {
        Self {
            name: spec.name.clone(),
            amount: amount_label(spec.quantity, spec.units.as_deref()),
            quantity: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pre-formatted `"<quantity> <units>"` label from the wire description.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity += 1;
    }

    /// No-op at the floor of 1.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }
}

fn amount_label(quantity: Option<f64>, units: Option<&str>) -> String {
    let quantity = quantity
        .map(format_quantity)
        .unwrap_or_else(|| "1".to_string());
    format!("{quantity} {}", units.unwrap_or("piece"))
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[derive(Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            origin: Origin::User,
            sent_at: Local::now(),
            body: EntryBody::Text(text.into()),
        });
    }

    pub fn push_pending(&mut self, submission: SubmissionId) {
        self.entries.push(TranscriptEntry {
            origin: Origin::Assistant,
            sent_at: Local::now(),
            body: EntryBody::Pending(submission),
        });
    }

    /// Replaces the pending entry for `submission` with its outcome, at the
    /// position the placeholder occupied. Returns `false` when no placeholder
    /// with that id exists (already resolved, or never inserted).
    pub fn resolve(&mut self, submission: SubmissionId, body: EntryBody) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.body == EntryBody::Pending(submission))
        else {
            return false;
        };

        self.entries[index] = TranscriptEntry {
            origin: Origin::Assistant,
            sent_at: Local::now(),
            body,
        };
        true
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Mutable access for rendering; stepper clicks mutate cards in place.
    pub fn entries_mut(&mut self) -> &mut [TranscriptEntry] {
        &mut self.entries
    }

    pub fn has_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry.body, EntryBody::Pending(_)))
    }
}
