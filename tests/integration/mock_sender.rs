//! In-memory inquiry sender for integration testing.
//!
//! Records every inquiry it is handed and answers with a receipt stamped
//! at a fixed instant, so references are predictable. Can be switched to
//! fail every send.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use aura::inquiry::{Inquiry, InquirySender, SubmissionReceipt};
use aura::types::AuraError;

/// 2026-02-28T23:56:40.123Z, whose last six millisecond digits are 000123.
pub const ACCEPTED_AT_MILLIS: i64 = 1_772_323_000_123;

#[derive(Clone, Default)]
pub struct MockSender {
    sent: Arc<Mutex<Vec<Inquiry>>>,
    /// If set, every send is rejected with this status.
    reject_with: Arc<Mutex<Option<u16>>>,
}

impl MockSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(status: u16) -> Self {
        let sender = Self::default();
        sender.set_rejection(Some(status));
        sender
    }

    pub fn set_rejection(&self, status: Option<u16>) {
        *self.reject_with.lock().unwrap() = status;
    }

    pub fn sent(&self) -> Vec<Inquiry> {
        self.sent.lock().unwrap().clone()
    }

    fn accepted_at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ACCEPTED_AT_MILLIS).single().unwrap()
    }
}

#[async_trait]
impl InquirySender for MockSender {
    async fn send(&self, inquiry: &Inquiry) -> Result<SubmissionReceipt, AuraError> {
        self.sent.lock().unwrap().push(inquiry.clone());

        if let Some(status) = *self.reject_with.lock().unwrap() {
            return Err(AuraError::SubmissionRejected {
                status,
                body: r#"{"error":"Failed to send email"}"#.into(),
            });
        }

        let n = self.sent.lock().unwrap().len();
        Ok(SubmissionReceipt::new(Some(format!("mock_{n}")), Self::accepted_at()))
    }
}
