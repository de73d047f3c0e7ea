use crate::background_actors::relay::Relay;
use crate::messages::internal_messages::Broadcast;
use actix::prelude::*;
use colored::Color;
use common::constants::REMINDER_PERIOD;
use common::logger::Logger;
use common::messages::network_messages::{NetworkMessage, ReminderNotification};

/// The `Reminder` actor raises the daily lunch notification.
///
/// ## Responsibilities:
/// - Fire once immediately on startup, then once per 24-hour period.
/// - Print the notification banner in the background console.
/// - Push the same notification through the relay so an open popup shows it.
///
/// Stateless by design of the schedule: a fire missed while the machine was
/// asleep is not recovered.
pub struct Reminder {
    pub relay: Addr<Relay>,
    pub logger: Logger,
}

impl Reminder {
    pub fn new(relay: Addr<Relay>) -> Self {
        Reminder {
            relay,
            logger: Logger::new("Reminder", Color::BrightBlue),
        }
    }

    fn fire(&self) {
        let notification = ReminderNotification {
            title: "Lunch Lotto".to_string(),
            body: "It's time for lunch! Open the Lunch Lotto popup to find your meal."
                .to_string(),
        };
        self.logger
            .info(format!("{} — {}", notification.title, notification.body));
        self.relay.do_send(Broadcast {
            message: NetworkMessage::ReminderNotification(notification),
        });
    }
}

impl Actor for Reminder {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info("Reminder scheduler started.");
        self.fire();
        ctx.run_interval(REMINDER_PERIOD, |act, _ctx| act.fire());
    }
}
