//! Member service — use-cases for managing gym members.

use fitcenter_domain::error::FitCenterError;
use fitcenter_domain::id::MemberId;
use fitcenter_domain::member::{Member, MemberDraft};

use crate::ports::MemberRepository;

/// Application service for member CRUD operations.
pub struct MemberService<R> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all members.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_members(&self) -> Result<Vec<Member>, FitCenterError> {
        self.repo.list().await
    }

    /// Register a new member.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(member_name = %draft.name))]
    pub async fn add_member(&self, draft: MemberDraft) -> Result<MemberId, FitCenterError> {
        let id = self.repo.create(draft).await?;
        tracing::debug!(%id, "member added");
        Ok(id)
    }

    /// Replace name and age of a member.
    ///
    /// Updating an id that does not exist succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_member(
        &self,
        id: MemberId,
        draft: MemberDraft,
    ) -> Result<(), FitCenterError> {
        let affected = self.repo.update(id, draft).await?;
        tracing::debug!(affected, "member update applied");
        Ok(())
    }

    /// Remove a member.
    ///
    /// # Errors
    ///
    /// Returns [`FitCenterError::NotFound`] when no member with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_member(&self, id: MemberId) -> Result<(), FitCenterError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcenter_domain::error::NotFoundError;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryMemberRepo {
        store: Mutex<BTreeMap<MemberId, Member>>,
    }

    impl MemberRepository for InMemoryMemberRepo {
        fn list(&self) -> impl Future<Output = Result<Vec<Member>, FitCenterError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Member> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn create(
            &self,
            draft: MemberDraft,
        ) -> impl Future<Output = Result<MemberId, FitCenterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let next = store.keys().next_back().map_or(1, |id| id.get() + 1);
            let id = MemberId::from(next);
            store.insert(id, draft.into_member(id));
            async move { Ok(id) }
        }

        fn update(
            &self,
            id: MemberId,
            draft: MemberDraft,
        ) -> impl Future<Output = Result<u64, FitCenterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = match store.get_mut(&id) {
                Some(member) => {
                    *member = draft.into_member(id);
                    1
                }
                None => 0,
            };
            async move { Ok(affected) }
        }

        fn delete(&self, id: MemberId) -> impl Future<Output = Result<(), FitCenterError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result: Result<(), FitCenterError> = store
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| NotFoundError::Member(id).into());
            async move { result }
        }
    }

    fn make_service() -> MemberService<InMemoryMemberRepo> {
        MemberService::new(InMemoryMemberRepo::default())
    }

    fn ana() -> MemberDraft {
        MemberDraft {
            name: "Ana".to_string(),
            age: 29,
        }
    }

    #[tokio::test]
    async fn should_list_added_member() {
        let svc = make_service();
        let id = svc.add_member(ana()).await.unwrap();

        let all = svc.list_members().await.unwrap();
        assert_eq!(all, vec![ana().into_member(id)]);
    }

    #[tokio::test]
    async fn should_update_member_in_place() {
        let svc = make_service();
        let id = svc.add_member(ana()).await.unwrap();

        svc.update_member(
            id,
            MemberDraft {
                name: "Ana Maria".to_string(),
                age: 30,
            },
        )
        .await
        .unwrap();

        let all = svc.list_members().await.unwrap();
        assert_eq!(all[0].name, "Ana Maria");
        assert_eq!(all[0].age, 30);
    }

    #[tokio::test]
    async fn should_succeed_when_updating_missing_member() {
        let svc = make_service();
        svc.update_member(MemberId::from(404), ana()).await.unwrap();
        assert!(svc.list_members().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_remove_existing_member() {
        let svc = make_service();
        let id = svc.add_member(ana()).await.unwrap();

        svc.remove_member(id).await.unwrap();
        assert!(svc.list_members().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_removing_missing_member() {
        let svc = make_service();
        let result = svc.remove_member(MemberId::from(5)).await;
        assert!(matches!(
            result,
            Err(FitCenterError::NotFound(NotFoundError::Member(id))) if id == MemberId::from(5)
        ));
    }
}
