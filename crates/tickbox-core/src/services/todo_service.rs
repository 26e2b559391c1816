//! Todo service - orchestrates todo CRUD operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{TodoItem, item_to_record, record_to_item};
use crate::ports::{CoreError, RepositoryError, TodoRepository};

/// Operations offered to adapters for working with todo items.
///
/// Both the HTTP and CLI adapters consume this trait, so they share one
/// implementation and tests can substitute their own.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// List all todos in storage order.
    async fn find_all(&self) -> Result<Vec<TodoItem>, CoreError>;

    /// Fetch a todo by id.
    ///
    /// Returns `Err(CoreError::NotFound)` if no todo has that id.
    async fn find_by_id(&self, id: i64) -> Result<TodoItem, CoreError>;

    /// Create a todo. Any id supplied by the caller is discarded; the
    /// returned item carries the storage-assigned one.
    async fn create(&self, item: TodoItem) -> Result<TodoItem, CoreError>;

    /// Replace an existing todo, keyed by the item's id.
    ///
    /// Returns `Err(CoreError::NotFound)` when the id references no
    /// stored todo; in that case nothing is created.
    async fn update(&self, item: TodoItem) -> Result<TodoItem, CoreError>;

    /// Delete a todo by id.
    ///
    /// Returns `Err(CoreError::NotFound)` if no todo has that id.
    async fn delete(&self, id: i64) -> Result<(), CoreError>;

    /// Delete every todo. Idempotent.
    async fn delete_all(&self) -> Result<(), CoreError>;
}

/// The production `TodoService` implementation.
///
/// This service provides todo management by delegating to the injected
/// `TodoRepository`. It owns the DTO/record conversions and the existence
/// checks - a thin facade, no other business logic.
pub struct TodoDataService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoDataService {
    /// Create a new todo service with the given repository.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }
}

/// Map a repository miss during a mutation onto the client-facing
/// error. The row can vanish between the existence check and the SQL
/// statement; the caller still gets the one documented message.
fn vanished(id: i64, err: RepositoryError) -> CoreError {
    match err {
        RepositoryError::NotFound(_) => CoreError::not_found(id),
        other => CoreError::Repository(other),
    }
}

#[async_trait]
impl TodoService for TodoDataService {
    async fn find_all(&self) -> Result<Vec<TodoItem>, CoreError> {
        let records = self.repo.find_all().await?;
        Ok(records.iter().map(record_to_item).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<TodoItem, CoreError> {
        let record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(id))?;
        Ok(record_to_item(&record))
    }

    async fn create(&self, item: TodoItem) -> Result<TodoItem, CoreError> {
        let mut record = item_to_record(&item);
        // Ids are storage-assigned; whatever the caller sent is discarded
        record.id = None;
        let saved = self.repo.save(&record).await?;
        tracing::debug!(id = ?saved.id, "created todo");
        Ok(record_to_item(&saved))
    }

    async fn update(&self, item: TodoItem) -> Result<TodoItem, CoreError> {
        // An absent id behaves like a never-assigned one: ids start at 1,
        // so 0 cannot match a stored row
        let id = item.id.unwrap_or(0);
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CoreError::not_found(id));
        }
        let saved = self
            .repo
            .save(&item_to_record(&item))
            .await
            .map_err(|e| vanished(id, e))?;
        tracing::debug!(id, "updated todo");
        Ok(record_to_item(&saved))
    }

    async fn delete(&self, id: i64) -> Result<(), CoreError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CoreError::not_found(id));
        }
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| vanished(id, e))?;
        tracing::debug!(id, "deleted todo");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), CoreError> {
        self.repo.delete_all().await?;
        tracing::debug!("deleted all todos");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoRecord;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime, Utc};
    use mockall::mock;
    use std::sync::Mutex;

    struct InMemoryRepo {
        records: Mutex<Vec<TodoRecord>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryRepo {
        fn new() -> Self {
            Self {
                records: Mutex::new(vec![]),
                next_id: Mutex::new(1),
            }
        }

        fn len(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TodoRepository for InMemoryRepo {
        async fn find_all(&self) -> Result<Vec<TodoRecord>, RepositoryError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == Some(id))
                .cloned())
        }

        #[allow(clippy::significant_drop_tightening)]
        async fn save(&self, record: &TodoRecord) -> Result<TodoRecord, RepositoryError> {
            let mut saved = record.clone();
            if saved.created.is_none() {
                saved.created = Some(Utc::now().naive_utc());
            }

            let mut records = self.records.lock().unwrap();
            match saved.id {
                None => {
                    let mut next = self.next_id.lock().unwrap();
                    saved.id = Some(*next);
                    *next += 1;
                    records.push(saved.clone());
                }
                Some(id) => {
                    let slot = records
                        .iter_mut()
                        .find(|r| r.id == Some(id))
                        .ok_or(RepositoryError::NotFound(id))?;
                    slot.clone_from(&saved);
                }
            }

            Ok(saved)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
            let mut records = self.records.lock().unwrap();
            let len_before = records.len();
            records.retain(|r| r.id != Some(id));
            if records.len() == len_before {
                Err(RepositoryError::NotFound(id))
            } else {
                Ok(())
            }
        }

        async fn delete_all(&self) -> Result<(), RepositoryError> {
            self.records.lock().unwrap().clear();
            Ok(())
        }
    }

    mock! {
        Repo {}

        #[async_trait]
        impl TodoRepository for Repo {
            async fn find_all(&self) -> Result<Vec<TodoRecord>, RepositoryError>;
            async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError>;
            async fn save(&self, record: &TodoRecord) -> Result<TodoRecord, RepositoryError>;
            async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<(), RepositoryError>;
        }
    }

    fn new_item(name: &str) -> TodoItem {
        TodoItem {
            id: None,
            name: name.to_string(),
            completed: false,
            created: None,
        }
    }

    fn fixed_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let mut item = new_item("buy milk");
        item.id = Some(99); // caller ids are discarded

        let created = service.create(item).await.unwrap();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "buy milk");
    }

    #[tokio::test]
    async fn test_create_fills_created_when_missing() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let created = service.create(new_item("write report")).await.unwrap();
        assert!(created.created.is_some());
    }

    #[tokio::test]
    async fn test_create_preserves_supplied_created() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let mut item = new_item("water plants");
        item.created = Some(fixed_timestamp());

        let created = service.create(item).await.unwrap();
        assert_eq!(created.created, Some(fixed_timestamp()));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_created_item() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let created = service.create(new_item("call dentist")).await.unwrap();
        let found = service.find_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_formats_message() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let err = service.find_by_id(-42).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (-42) is not found.");
    }

    #[tokio::test]
    async fn test_find_all_lists_everything_in_order() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        for i in 1..=3 {
            service
                .create(new_item(&format!("todo-item_{i}")))
                .await
                .unwrap();
        }

        let all = service.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["todo-item_1", "todo-item_2", "todo-item_3"]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let created = service.create(new_item("draft email")).await.unwrap();
        let replacement = TodoItem {
            id: created.id,
            name: "send email".to_string(),
            completed: true,
            created: Some(fixed_timestamp()),
        };

        let updated = service.update(replacement.clone()).await.unwrap();
        assert_eq!(updated, replacement);

        let found = service.find_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(found, replacement);
    }

    #[tokio::test]
    async fn test_update_missing_id_creates_nothing() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo.clone());

        let mut item = new_item("ghost");
        item.id = Some(-25);

        let err = service.update(item).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (-25) is not found.");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_update_without_id_is_not_found() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo.clone());

        let err = service.update(new_item("ghost")).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (0) is not found.");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo.clone());

        let created = service.create(new_item("tidy desk")).await.unwrap();
        service.delete(created.id.unwrap()).await.unwrap();

        assert_eq!(repo.len(), 0);
        let err = service.find_by_id(created.id.unwrap()).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_id_formats_message() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        let err = service.delete(-42).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (-42) is not found.");
    }

    #[tokio::test]
    async fn test_delete_all_is_idempotent() {
        let repo = Arc::new(InMemoryRepo::new());
        let service = TodoDataService::new(repo);

        service.create(new_item("one")).await.unwrap();
        service.create(new_item("two")).await.unwrap();

        service.delete_all().await.unwrap();
        assert!(service.find_all().await.unwrap().is_empty());

        // A second pass over empty storage still succeeds
        service.delete_all().await.unwrap();
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockRepo::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Storage("disk I/O error".to_string())));

        let service = TodoDataService::new(Arc::new(repo));
        let err = service.find_all().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::Storage(_))
        ));
    }

    fn vanishing_record(id: i64) -> TodoRecord {
        TodoRecord {
            id: Some(id),
            name: "doomed".to_string(),
            completed: false,
            created: None,
        }
    }

    #[tokio::test]
    async fn test_update_formats_message_when_row_vanishes_before_save() {
        let mut repo = MockRepo::new();
        // The existence check passes, then the row is gone at save time
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(vanishing_record(id))));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::NotFound(7)));

        let service = TodoDataService::new(Arc::new(repo));
        let mut item = new_item("doomed");
        item.id = Some(7);

        let err = service.update(item).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (7) is not found.");
    }

    #[tokio::test]
    async fn test_delete_formats_message_when_row_vanishes_before_delete() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(vanishing_record(id))));
        repo.expect_delete_by_id()
            .returning(|_| Err(RepositoryError::NotFound(7)));

        let service = TodoDataService::new(Arc::new(repo));
        let err = service.delete(7).await.unwrap_err();
        assert_eq!(err.to_string(), "Todo (7) is not found.");
    }
}
