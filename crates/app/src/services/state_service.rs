//! State service: use-cases for managing states.

use hbnb_domain::error::HbnbError;
use hbnb_domain::id::StateId;
use hbnb_domain::payload::{self, Payload};
use hbnb_domain::state::{NewState, State, StatePatch};
use hbnb_domain::time::now;

use super::found;
use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, HbnbError> {
        self.repo.get_all().await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_state(&self, id: StateId) -> Result<State, HbnbError> {
        found(id, self.repo.get_by_id(id).await?)
    }

    /// Validate `body` and persist a new state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when the body is not a JSON object,
    /// lacks `name`, or holds a wrongly typed value; or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn create_state(&self, body: Option<Payload>) -> Result<State, HbnbError> {
        let body = payload::require_object(body)?;
        payload::require_fields(&body, State::REQUIRED)?;
        let draft: NewState = payload::decode::<State, _>(body)?;

        let state = self.repo.create(State::create(draft, now())).await?;
        tracing::info!(state_id = %state.id, "state created");
        Ok(state)
    }

    /// Apply the keys of `body` to an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// [`HbnbError::Validation`] when the body is rejected, or a storage error.
    #[tracing::instrument(skip(self, body))]
    pub async fn update_state(
        &self,
        id: StateId,
        body: Option<Payload>,
    ) -> Result<State, HbnbError> {
        let mut state = self.get_state(id).await?;
        let body = payload::require_object(body)?;
        let patch: StatePatch = payload::decode::<State, _>(body)?;

        state.apply(patch, now());
        self.repo.update(state).await
    }

    /// Delete a state and the cities it owns.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_state(&self, id: StateId) -> Result<(), HbnbError> {
        self.get_state(id).await?;
        self.repo.delete(id).await?;
        tracing::info!(state_id = %id, "state deleted");
        Ok(())
    }

    /// Number of stored states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_states(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::services::testing::{InMemoryStore, body};
    use hbnb_domain::error::ValidationError;

    fn make_service() -> StateService<InMemoryStore> {
        StateService::new(InMemoryStore::default())
    }

    #[tokio::test]
    async fn should_create_state_when_name_present() {
        let svc = make_service();

        let created = svc
            .create_state(body(json!({"name": "California"})))
            .await
            .unwrap();
        assert_eq!(created.name, "California");

        let fetched = svc.get_state(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_body_absent() {
        let svc = make_service();
        let result = svc.create_state(None).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::NotAJson))
        ));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_missing_and_store_nothing() {
        let svc = make_service();
        let result = svc.create_state(body(json!({"capital": "Austin"}))).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
        assert_eq!(svc.count_states().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id_on_create() {
        let svc = make_service();
        let forged = StateId::new();
        let created = svc
            .create_state(body(json!({"name": "Ohio", "id": forged.to_string()})))
            .await
            .unwrap();
        assert_ne!(created.id, forged);
    }

    #[tokio::test]
    async fn should_return_not_found_when_state_missing() {
        let svc = make_service();
        let result = svc.get_state(StateId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_name_but_not_identity() {
        let svc = make_service();
        let created = svc
            .create_state(body(json!({"name": "Texas"})))
            .await
            .unwrap();

        let updated = svc
            .update_state(
                created.id,
                body(json!({
                    "name": "Oregon",
                    "id": StateId::new().to_string(),
                    "created_at": "2001-01-01T00:00:00Z",
                })),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Oregon");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(svc.get_state(created.id).await.unwrap().name, "Oregon");
    }

    #[tokio::test]
    async fn should_check_existence_before_body_on_update() {
        let svc = make_service();
        let result = svc.update_state(StateId::new(), None).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_update_without_json_body() {
        let svc = make_service();
        let created = svc
            .create_state(body(json!({"name": "Texas"})))
            .await
            .unwrap();
        let result = svc.update_state(created.id, None).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::NotAJson))
        ));
    }

    #[tokio::test]
    async fn should_delete_state() {
        let svc = make_service();
        let created = svc
            .create_state(body(json!({"name": "Maine"})))
            .await
            .unwrap();

        svc.delete_state(created.id).await.unwrap();

        let result = svc.get_state(created.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
        assert!(matches!(
            svc.delete_state(created.id).await,
            Err(HbnbError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_list_all_states() {
        let svc = make_service();
        svc.create_state(body(json!({"name": "Iowa"}))).await.unwrap();
        svc.create_state(body(json!({"name": "Idaho"})))
            .await
            .unwrap();

        let all = svc.list_states().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Iowa");
    }
}
