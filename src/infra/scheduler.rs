//! Background timer for the simulated assistant reply.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::domain::events::AppEvent;
use crate::usecases::contracts::ReplyScheduler;

/// Delivers each scheduled reply as an `AppEvent::AssistantReply` on the app
/// event channel after the delay elapses. One short-lived thread per reply.
#[derive(Debug, Clone)]
pub struct ThreadReplyScheduler {
    sender: Sender<AppEvent>,
}

impl ThreadReplyScheduler {
    pub fn new(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }
}

impl ReplyScheduler for ThreadReplyScheduler {
    fn schedule(&self, delay: Duration, content: String) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            // The receiver is gone during shutdown; nothing left to notify.
            if sender.send(AppEvent::AssistantReply(content)).is_err() {
                tracing::debug!("assistant reply dropped: event channel closed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn delivers_the_reply_on_the_channel() {
        let (tx, rx) = mpsc::channel();
        let scheduler = ThreadReplyScheduler::new(tx);

        scheduler.schedule(Duration::from_millis(0), "hello".to_owned());

        let event = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("reply must arrive");
        assert_eq!(event, AppEvent::AssistantReply("hello".to_owned()));
    }

    #[test]
    fn closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let scheduler = ThreadReplyScheduler::new(tx);

        scheduler.schedule(Duration::from_millis(0), "hello".to_owned());
        thread::sleep(Duration::from_millis(50));
    }
}
