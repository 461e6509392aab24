//! Notifications the engine emits when a player's input is required.
//!
//! Observers are owned by the caller and registered on a round with
//! [`Round::subscribe`](crate::domain::round::Round::subscribe). Delivery is
//! fire-and-forget: the engine never waits for a reply, resolution happens
//! when the matching `handle_*` call arrives.

use std::fmt;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::state::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEvent {
    ShakerInputNeeded,
    MoverInputNeeded,
    GiverInputNeeded,
    /// A trick (a "hand" of play) resolved; sent to the winner.
    HandComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub round_id: RoundId,
    pub player: PlayerId,
    pub event: RoundEvent,
}

/// Receives round notifications.
pub trait RoundObserver: Send {
    fn notify(&self, notification: &Notification);
}

impl<F> RoundObserver for F
where
    F: Fn(&Notification) + Send,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

impl RoundObserver for Sender<Notification> {
    fn notify(&self, notification: &Notification) {
        if self.send(*notification).is_err() {
            warn!(
                round_id = %notification.round_id,
                player = notification.player,
                event = ?notification.event,
                "Dropping notification, receiver is gone"
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Caller-registered observers in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn RoundObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn RoundObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn dispatch(&self, notifications: &[Notification]) {
        for notification in notifications {
            for (_, observer) in &self.entries {
                observer.notify(notification);
            }
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
