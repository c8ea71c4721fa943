// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::model::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}

/// Transient notifications, oldest first. Ids increase monotonically and are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    last_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        ttl: Duration,
        now: Instant,
    ) -> ToastId {
        self.last_id += 1;
        let id = ToastId::new(self.last_id);
        self.toasts.push(Toast { id, message: message.into(), kind, expires_at: now + ttl });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drops every toast whose time is up. Returns how many went.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        before - self.toasts.len()
    }

    /// Toasts still on screen at `now`, whether or not [`ToastQueue::prune`] has run yet.
    pub fn active(&self, now: Instant) -> impl Iterator<Item = &Toast> + '_ {
        self.toasts.iter().filter(move |toast| toast.expires_at > now)
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(Toast::expires_at).min()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
