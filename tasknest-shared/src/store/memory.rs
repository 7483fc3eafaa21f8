//! # In-Memory Backend
//!
//! Vector-backed stores behind async locks. Selected with
//! `STORAGE_BACKEND=memory` for local runs without Postgres, and used by
//! the test suites. Semantics match the Postgres backend: ids and
//! timestamps are assigned on insert, lists come back oldest first, and
//! updates replace whole records.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Attachment, Comment, NewAttachment, NewComment, NewSubTask, NewTask, NewWorkout, SubTask,
    Task, UpdateProfile, User, Workout,
};

use super::{
    AttachmentStore, CommentStore, StoreError, SubTaskStore, TaskStore, UserStore, WorkoutStore,
};

/// Volatile storage. Everything is gone when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: RwLock<Vec<Task>>,
    subtasks: RwLock<Vec<SubTask>>,
    comments: RwLock<Vec<Comment>>,
    attachments: RwLock<Vec<Attachment>>,
    workouts: RwLock<Vec<Workout>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user record directly. User accounts are normally
    /// provisioned by the auth service, which this backend does not
    /// talk to, so tests and local setups seed them here.
    pub async fn seed_user(&self, user: User) {
        self.users.write().await.push(user);
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, task: NewTask) -> Result<Task, StoreError> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            reminder: task.reminder,
            reminder_time: task.reminder_time,
            created_at: now,
            updated_at: now,
        };
        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Task>, StoreError> {
        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, task: Task) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                let stored = Task {
                    updated_at: Utc::now(),
                    ..task
                };
                *slot = stored.clone();
                Ok(Some(stored))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() < before)
    }
}

#[async_trait]
impl SubTaskStore for MemoryStore {
    async fn insert(&self, subtask: NewSubTask) -> Result<SubTask, StoreError> {
        let subtask = SubTask {
            id: Uuid::new_v4(),
            task_id: subtask.task_id,
            title: subtask.title,
            username: subtask.username,
            completed: subtask.completed,
            timing: subtask.timing,
            created_at: Utc::now(),
        };
        self.subtasks.write().await.push(subtask.clone());
        Ok(subtask)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubTask>, StoreError> {
        Ok(self
            .subtasks
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<SubTask>, StoreError> {
        Ok(self
            .subtasks
            .read()
            .await
            .iter()
            .filter(|s| s.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn update(&self, subtask: SubTask) -> Result<Option<SubTask>, StoreError> {
        let mut subtasks = self.subtasks.write().await;
        match subtasks.iter_mut().find(|s| s.id == subtask.id) {
            Some(slot) => {
                *slot = subtask.clone();
                Ok(Some(subtask))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut subtasks = self.subtasks.write().await;
        let before = subtasks.len();
        subtasks.retain(|s| s.id != id);
        Ok(subtasks.len() < before)
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError> {
        let comment = Comment {
            id: Uuid::new_v4(),
            task_id: comment.task_id,
            user_id: comment.user_id,
            username: comment.username,
            content: comment.content,
            created_at: Utc::now(),
        };
        self.comments.write().await.push(comment.clone());
        Ok(comment)
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Comment>, StoreError> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.task_id == task_id)
            .count() as i64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok(comments.len() < before)
    }
}

#[async_trait]
impl AttachmentStore for MemoryStore {
    async fn insert(&self, attachment: NewAttachment) -> Result<Attachment, StoreError> {
        let attachment = Attachment {
            id: Uuid::new_v4(),
            task_id: attachment.task_id,
            file_name: attachment.file_name,
            file_url: attachment.file_url,
            file_type: attachment.file_type,
            created_at: Utc::now(),
        };
        self.attachments.write().await.push(attachment.clone());
        Ok(attachment)
    }

    async fn list_by_task(&self, task_id: Uuid) -> Result<Vec<Attachment>, StoreError> {
        Ok(self
            .attachments
            .read()
            .await
            .iter()
            .filter(|a| a.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn count_by_task(&self, task_id: Uuid) -> Result<i64, StoreError> {
        Ok(self
            .attachments
            .read()
            .await
            .iter()
            .filter(|a| a.task_id == task_id)
            .count() as i64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut attachments = self.attachments.write().await;
        let before = attachments.len();
        attachments.retain(|a| a.id != id);
        Ok(attachments.len() < before)
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn insert(&self, workout: NewWorkout) -> Result<Workout, StoreError> {
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id: workout.user_id,
            name: workout.name,
            duration: workout.duration,
            date: workout.date,
        };
        self.workouts.write().await.push(workout.clone());
        Ok(workout)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Workout>, StoreError> {
        let mut workouts: Vec<Workout> = self
            .workouts
            .read()
            .await
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        workouts.sort_by_key(|w| w.date);
        Ok(workouts)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut workouts = self.workouts.write().await;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        Ok(workouts.len() < before)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        profile: UpdateProfile,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.email = profile.email;
                user.full_name = profile.full_name;
                user.bio = profile.bio;
                user.profile_image = profile.profile_image;
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::store::Stores;
    use std::sync::Arc;

    fn new_task(user_id: Uuid, title: &str) -> NewTask {
        NewTask {
            user_id,
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            status: Default::default(),
            reminder: false,
            reminder_time: None,
        }
    }

    #[tokio::test]
    async fn test_tasks_list_in_insertion_order() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let user_id = Uuid::new_v4();

        stores.tasks.insert(new_task(user_id, "first")).await.unwrap();
        stores.tasks.insert(new_task(user_id, "second")).await.unwrap();
        stores.tasks.insert(new_task(user_id, "third")).await.unwrap();

        let titles: Vec<String> = stores
            .tasks
            .list_by_user(user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let ada = Uuid::new_v4();
        let bob = Uuid::new_v4();

        stores.tasks.insert(new_task(ada, "hers")).await.unwrap();
        stores.tasks.insert(new_task(bob, "his")).await.unwrap();

        let tasks = stores.tasks.list_by_user(ada).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "hers");
    }

    #[tokio::test]
    async fn test_update_missing_task_returns_none() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let task = stores
            .tasks
            .insert(new_task(Uuid::new_v4(), "short-lived"))
            .await
            .unwrap();

        assert!(stores.tasks.delete(task.id).await.unwrap());
        assert!(stores.tasks.update(task).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_record_and_bumps_updated_at() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let task = stores
            .tasks
            .insert(new_task(Uuid::new_v4(), "before"))
            .await
            .unwrap();

        let mut edited = task.clone();
        edited.title = "after".to_string();

        let stored = stores.tasks.update(edited).await.unwrap().unwrap();
        assert_eq!(stored.title, "after");
        assert_eq!(stored.created_at, task.created_at);
        assert!(stored.updated_at >= task.updated_at);
    }

    #[tokio::test]
    async fn test_delete_task_leaves_children_behind() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let task = stores
            .tasks
            .insert(new_task(Uuid::new_v4(), "parent"))
            .await
            .unwrap();

        stores
            .subtasks
            .insert(NewSubTask {
                task_id: task.id,
                title: "child".to_string(),
                username: "ada".to_string(),
                completed: false,
                timing: None,
            })
            .await
            .unwrap();

        assert!(stores.tasks.delete(task.id).await.unwrap());

        // No cascade: the subtask is now an orphan but still listable.
        let orphans = stores.subtasks.list_by_task(task.id).await.unwrap();
        assert_eq!(orphans.len(), 1);
    }

    #[tokio::test]
    async fn test_counts_follow_inserts_and_deletes() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let task_id = Uuid::new_v4();

        let comment = stores
            .comments
            .insert(NewComment {
                task_id,
                user_id: Uuid::new_v4(),
                username: "ada".to_string(),
                content: "looks good".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(stores.comments.count_by_task(task_id).await.unwrap(), 1);

        assert!(stores.comments.delete(comment.id).await.unwrap());
        assert_eq!(stores.comments.count_by_task(task_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_workouts_sort_by_date() {
        let stores = Stores::memory(Arc::new(MemoryStore::new()));
        let user_id = Uuid::new_v4();
        let now = Utc::now();

        stores
            .workouts
            .insert(NewWorkout {
                user_id,
                name: "evening run".to_string(),
                duration: Some(40),
                date: now,
            })
            .await
            .unwrap();
        stores
            .workouts
            .insert(NewWorkout {
                user_id,
                name: "morning swim".to_string(),
                duration: Some(30),
                date: now - chrono::Duration::hours(10),
            })
            .await
            .unwrap();

        let names: Vec<String> = stores
            .workouts
            .list_by_user(user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["morning swim", "evening run"]);
    }

    #[tokio::test]
    async fn test_profile_update_overwrites_fields() {
        let store = Arc::new(MemoryStore::new());
        let stores = Stores::memory(store.clone());
        let now = Utc::now();
        let user_id = Uuid::new_v4();

        store
            .seed_user(User {
                id: user_id,
                username: "ada".to_string(),
                password_hash: "hash".to_string(),
                email: Some("old@example.com".to_string()),
                full_name: Some("Ada L.".to_string()),
                bio: Some("counting machines".to_string()),
                profile_image: None,
                created_at: now,
                updated_at: now,
            })
            .await;

        let updated = stores
            .users
            .update_profile(
                user_id,
                UpdateProfile {
                    email: Some("new@example.com".to_string()),
                    full_name: None,
                    bio: None,
                    profile_image: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.email.as_deref(), Some("new@example.com"));
        // Whole-value semantics: fields absent from the input are cleared.
        assert_eq!(updated.full_name, None);
        assert_eq!(updated.bio, None);
        assert_eq!(updated.username, "ada");
    }
}
