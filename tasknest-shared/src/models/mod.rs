//! # Data Models
//!
//! Records making up the task aggregate, plus the profile and workout
//! records that share its storage. Each model maps to one table; the
//! matching schema lives in `migrations/`.
//!
//! Query code does not live here. The `store` module owns persistence,
//! and these types cross that boundary as whole values.

pub mod attachment;
pub mod comment;
pub mod subtask;
pub mod task;
pub mod user;
pub mod workout;

pub use attachment::{Attachment, NewAttachment};
pub use comment::{Comment, NewComment};
pub use subtask::{NewSubTask, SubTask};
pub use task::{CreateTask, NewTask, Priority, Task, TaskStatus, TaskView, UpdateTask};
pub use user::{UpdateProfile, User};
pub use workout::{NewWorkout, Workout};
