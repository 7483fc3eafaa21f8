//! # Reminder Defaulting Policy
//!
//! Creates and updates both carry an optional reminder flag and an
//! optional reminder time. The stored pair is resolved here, in one
//! place, before any record is written:
//!
//! - flag absent or `false`: reminders are off and the stored time is
//!   cleared, whatever the payload said
//! - flag `true` with a time: both are stored as given
//! - flag `true` without a time: the payload's due date is borrowed as
//!   the reminder time
//!
//! When the flag is `true` but neither a time nor a due date exists, the
//! record keeps `reminder = true` with no time. Scheduling treats that
//! state the same as no reminder at all, but it is preserved so the
//! intent survives a later edit that adds a due date.

use chrono::{DateTime, Utc};

/// Resolves the stored `(reminder, reminder_time)` pair from a payload.
///
/// `reminder_time` and `due_date` must come from the same payload as the
/// flag; stored values never leak into the decision.
///
/// ```
/// use chrono::Utc;
/// use tasknest_shared::reminder;
///
/// let due = Some(Utc::now());
///
/// // Enabled without an explicit time: falls back to the due date.
/// assert_eq!(reminder::normalize(Some(true), None, due), (true, due));
///
/// // Disabled: any supplied time is dropped.
/// assert_eq!(reminder::normalize(Some(false), due, None), (false, None));
/// ```
pub fn normalize(
    reminder: Option<bool>,
    reminder_time: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
) -> (bool, Option<DateTime<Utc>>) {
    if reminder != Some(true) {
        return (false, None);
    }

    match reminder_time {
        Some(time) => (true, Some(time)),
        None => (true, due_date),
    }
}
