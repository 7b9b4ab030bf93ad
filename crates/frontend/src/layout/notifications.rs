use leptos::prelude::*;

/// Payload published when a reservation is created anywhere in the app.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationCreated {
    pub client_name: String,
    pub room_number: String,
    pub start_date: String,
}

/// In-process notification bus for cross-screen signaling, provided via
/// context at the root. Events are buffered: a subscriber that mounts after
/// a publish still observes the earlier events. The header derives its
/// badge count from the buffer.
#[derive(Clone, Copy)]
pub struct NotificationBus {
    events: RwSignal<Vec<ReservationCreated>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            events: RwSignal::new(Vec::new()),
        }
    }

    pub fn publish(&self, event: ReservationCreated) {
        self.events.update(|list| list.push(event));
    }

    pub fn events(&self) -> RwSignal<Vec<ReservationCreated>> {
        self.events
    }

    pub fn clear(&self) {
        self.events.update(|list| list.clear());
    }
}

pub fn use_notifications() -> NotificationBus {
    use_context::<NotificationBus>().expect("NotificationBus not provided in context")
}
