//! State-change notifications for study state
//!
//! Transitions on `StudyData` return the events they caused; the owner
//! publishes them on an `EventBus`, where listeners registered with
//! `subscribe` receive them in registration order.

use super::tracker::StreakChange;
use crate::catalog::Level;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, PoisonError};

/// Something that changed in the study state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyEvent {
    /// A new word selection was made for `date`
    PlanCreated {
        date: NaiveDate,
        level: Level,
        word_count: usize,
    },
    /// The calendar day advanced and completions became review words
    DayRolledOver {
        from: NaiveDate,
        to: NaiveDate,
        review_count: usize,
    },
    WordCompleted { id: String },
    WordUncompleted { id: String },
    TopicCompleted { id: String },
    StreakChanged { streak_days: u32, change: StreakChange },
    SettingsChanged { level: Level, words_per_day: u32 },
    ReminderChanged { enabled: bool, hour: u32, minute: u32 },
    /// All progress was cleared
    Reset,
}

/// Handle returned by `EventBus::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&StudyEvent) + Send + Sync>;

/// Explicit listener registry for study events
#[derive(Default)]
pub struct EventBus {
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_id: Mutex<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener that receives every published event
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&StudyEvent) + Send + Sync + 'static,
    {
        let mut next_id = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
        let id = ListenerId(*next_id);
        *next_id += 1;

        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener
    ///
    /// # Returns
    /// `true` if the listener was registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Deliver an event to every listener registered at the time of the call
    ///
    /// Listeners run without the registry lock held, so they may subscribe,
    /// unsubscribe or publish on the same bus.
    pub fn publish(&self, event: &StudyEvent) {
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn publish_all(&self, events: &[StudyEvent]) {
        for event in events {
            self.publish(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_publish() {
        let bus = EventBus::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&received);
        bus.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        bus.publish(&StudyEvent::Reset);
        bus.publish_all(&[
            StudyEvent::WordCompleted {
                id: "a1-haus".to_string(),
            },
            StudyEvent::TopicCompleted {
                id: "a1-articles".to_string(),
            },
        ]);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0], StudyEvent::Reset);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));

        let counter = Arc::clone(&count);
        let id = bus.subscribe(move |_| *counter.lock().unwrap() += 1);
        bus.publish(&StudyEvent::Reset);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&StudyEvent::Reset);

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_use_the_bus_while_handling_an_event() {
        let bus = Arc::new(EventBus::new());
        let own_id = Arc::new(Mutex::new(None));
        let seen_count = Arc::new(Mutex::new(Vec::new()));

        let bus_ref = Arc::clone(&bus);
        let id_ref = Arc::clone(&own_id);
        let count_ref = Arc::clone(&seen_count);
        let id = bus.subscribe(move |_| {
            count_ref.lock().unwrap().push(bus_ref.listener_count());
            if let Some(id) = *id_ref.lock().unwrap() {
                bus_ref.unsubscribe(id);
            }
        });
        *own_id.lock().unwrap() = Some(id);

        bus.publish(&StudyEvent::Reset);
        bus.publish(&StudyEvent::Reset);

        assert_eq!(*seen_count.lock().unwrap(), vec![1]);
        assert_eq!(bus.listener_count(), 0);
    }
}
