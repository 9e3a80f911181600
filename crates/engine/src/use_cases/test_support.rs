//! Shared test doubles for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use beastbound_domain::ActorId;

use crate::infrastructure::ports::NotificationPort;

/// Notification sink that records every delivery for assertions.
#[derive(Default)]
pub struct RecordingSink {
    broadcasts: Mutex<Vec<String>>,
    directs: Mutex<Vec<(ActorId, String)>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        match self.broadcasts.lock() {
            Ok(messages) => messages.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn direct_messages(&self) -> Vec<(ActorId, String)> {
        match self.directs.lock() {
            Ok(messages) => messages.clone(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait]
impl NotificationPort for RecordingSink {
    async fn broadcast(&self, text: &str) {
        if let Ok(mut messages) = self.broadcasts.lock() {
            messages.push(text.to_string());
        }
    }

    async fn send_to(&self, actor_id: ActorId, text: &str) {
        if let Ok(mut messages) = self.directs.lock() {
            messages.push((actor_id, text.to_string()));
        }
    }
}
