//! Transient "Copied!" indicator.
//!
//! A copy activates the indicator for one category and schedules its expiry
//! on the tokio runtime. Only the latest activation is honored: activating
//! again aborts the pending timer, and expiry events carry the generation
//! they were scheduled for so a late event from a superseded timer is a
//! no-op. Dropping the feedback aborts whatever timer is still pending.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::serializer::Category;

/// How long the indicator stays visible after a copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Sent when an activation's display time has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackExpired {
    pub generation: u64,
}

/// The category currently showing the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCopy {
    pub category: Category,
    pub expires_at: Instant,
}

/// Copy feedback state plus its single pending timer.
///
/// Expiry events are delivered through `tx`, typically the application's
/// event channel, and must be fed back through [`CopyFeedback::on_expired`].
#[derive(Debug)]
pub struct CopyFeedback<E = FeedbackExpired> {
    active: Option<ActiveCopy>,
    generation: u64,
    timer: Option<AbortHandle>,
    duration: Duration,
    tx: UnboundedSender<E>,
}

impl<E> CopyFeedback<E>
where
    E: From<FeedbackExpired> + Send + 'static,
{
    pub fn new(tx: UnboundedSender<E>) -> Self {
        Self::with_duration(tx, COPY_FEEDBACK_DURATION)
    }

    pub fn with_duration(tx: UnboundedSender<E>, duration: Duration) -> Self {
        Self {
            active: None,
            generation: 0,
            timer: None,
            duration,
            tx,
        }
    }

    /// Show the indicator for `category`, replacing any current one.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// of the new activation.
    pub fn activate(&mut self, category: Category) -> u64 {
        self.abort_timer();
        self.generation += 1;

        let generation = self.generation;
        let expires_at = Instant::now() + self.duration;
        self.active = Some(ActiveCopy {
            category,
            expires_at,
        });

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            let _ = tx.send(FeedbackExpired { generation }.into());
        });
        self.timer = Some(handle.abort_handle());

        tracing::debug!(%category, generation, "copy feedback shown");
        generation
    }

    /// Apply an expiry event. Returns `true` if the indicator was hidden.
    pub fn on_expired(&mut self, event: FeedbackExpired) -> bool {
        if event.generation != self.generation || self.active.is_none() {
            tracing::trace!(
                stale = event.generation,
                current = self.generation,
                "ignoring stale copy feedback expiry"
            );
            return false;
        }
        self.active = None;
        self.timer = None;
        true
    }

    pub fn active(&self) -> Option<ActiveCopy> {
        self.active
    }

    /// Whether the indicator is currently shown for `category`.
    pub fn is_active(&self, category: Category) -> bool {
        self.active.is_some_and(|active| active.category == category)
    }

    /// Hide the indicator now and drop the pending timer.
    pub fn cancel(&mut self) {
        self.abort_timer();
        // An expiry already queued for the old generation must not match.
        self.generation += 1;
        self.active = None;
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<E> Drop for CopyFeedback<E> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
