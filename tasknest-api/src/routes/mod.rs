//! # HTTP Routes
//!
//! One module per resource. Task routes go through the task service,
//! which enforces ownership; subtask, comment, and attachment routes
//! write through their stores directly, trusting the bearer token alone.

pub mod attachments;
pub mod comments;
pub mod health;
pub mod subtasks;
pub mod tasks;
pub mod users;
pub mod workouts;
