//! # Workout Model
//!
//! Personal workout log entries. Workouts are scoped to their owner but
//! are not part of the task aggregate; they have no children and no
//! derived data.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE workouts (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     user_id UUID NOT NULL,
//!     name VARCHAR(255) NOT NULL,
//!     duration INTEGER,
//!     date TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A workout record as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Duration in minutes
    pub duration: Option<i32>,
    /// When the workout happened
    pub date: DateTime<Utc>,
}

/// Insert input for a workout.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub user_id: Uuid,
    pub name: String,
    pub duration: Option<i32>,
    pub date: DateTime<Utc>,
}
