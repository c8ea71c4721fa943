// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use tokio::time::Instant;

use super::MapEvent;
use crate::config::TimingConfig;

/// Turns the SDK's raw move events into "the user finished moving the map" signals.
///
/// Two timers are involved:
/// - a *settle window* opened by every programmatic move, during which move events are dropped;
/// - a *debounce deadline* armed by every accepted move event and pushed back by the next one.
///
/// Both are time based. A programmatic move slower than the settle window can leak a move event
/// through; that is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGate {
    settle: Duration,
    debounce: Duration,
    suppressed_until: Option<Instant>,
    pending: Option<Instant>,
}

impl MoveGate {
    pub fn new(settle: Duration, debounce: Duration) -> Self {
        Self { settle, debounce, suppressed_until: None, pending: None }
    }

    pub fn from_timing(timing: &TimingConfig) -> Self {
        Self::new(timing.settle(), timing.move_debounce())
    }

    pub fn begin_programmatic_move(&mut self, now: Instant) {
        self.suppressed_until = Some(now + self.settle);
    }

    pub fn is_programmatic(&self, now: Instant) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }

    /// Feeds one raw event. Returns `true` when it (re)armed the debounce deadline.
    pub fn on_map_event(&mut self, event: MapEvent, now: Instant) -> bool {
        if !event.is_move() {
            return false;
        }
        if self.is_programmatic(now) {
            log::trace!("ignoring {event:?} during programmatic move");
            return false;
        }
        self.pending = Some(now + self.debounce);
        true
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Returns `true` exactly once per burst, after its debounce deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.suppressed_until = None;
        self.pending = None;
    }
}
