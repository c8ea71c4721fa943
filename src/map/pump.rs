// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use super::MapEvent;

/// Something that consumes raw map events and owns a debounce deadline.
pub trait MapEventSink {
    fn handle_map_event(&mut self, event: MapEvent, now: Instant);
    fn settle_deadline(&self) -> Option<Instant>;
    /// Called once the deadline returned by [`MapEventSink::settle_deadline`] has passed.
    fn on_settle_due(&mut self, now: Instant);
}

/// Drives `sink` from a channel of raw map events until every sender is gone.
///
/// A debounce still pending when the channel closes is waited out and delivered before
/// returning.
pub async fn pump_map_events<S>(events: &mut mpsc::Receiver<MapEvent>, sink: &mut S)
where
    S: MapEventSink + ?Sized,
{
    loop {
        let deadline = sink.settle_deadline();
        tokio::select! {
            event = events.recv() => match event {
                Some(event) => sink.handle_map_event(event, Instant::now()),
                None => break,
            },
            () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                sink.on_settle_due(Instant::now());
            }
        }
    }

    if let Some(deadline) = sink.settle_deadline() {
        sleep_until(deadline).await;
        sink.on_settle_due(Instant::now());
    }
    log::debug!("map event channel closed");
}
