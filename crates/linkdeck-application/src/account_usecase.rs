//! Account provisioning and profile edits.

use linkdeck_core::profile::{
    derive_handle, validate_handle, Profile, ProfilePatch, ProfileRepository,
};
use linkdeck_core::session::Session;
use linkdeck_core::{LinkdeckError, Result};
use std::sync::Arc;
use uuid::Uuid;

/// Owns the profile lifecycle this core supports: implicit creation on
/// first sign-in and explicit handle / display-name edits. Profiles are
/// never deleted.
pub struct AccountUsecase {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl AccountUsecase {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    /// Returns the session's profile, creating it on first sign-in.
    ///
    /// The default handle is derived from the contact address local-part.
    /// If that handle is already taken, one retry with a random suffix is
    /// made before the `Conflict` surfaces.
    pub async fn ensure_profile(&self, session: &Session) -> Result<Profile> {
        if let Some(profile) = self
            .profile_repository
            .find_by_id(&session.identity_id)
            .await?
        {
            return Ok(profile);
        }

        let handle = derive_handle(session.contact_local_part().unwrap_or(""));
        match self.provision(session, &handle).await {
            Err(LinkdeckError::Conflict(_)) => {
                let salted = salt_handle(&handle);
                tracing::debug!(handle, salted, "default handle taken, retrying");
                self.provision(session, &salted).await
            }
            other => other,
        }
    }

    /// Renames the profile's public handle.
    ///
    /// # Errors
    ///
    /// - `Validation` on a malformed handle, before any store call
    /// - `Conflict` when the handle is taken
    pub async fn update_handle(&self, owner_id: &str, handle: &str) -> Result<Profile> {
        validate_handle(handle)?;
        let patch = ProfilePatch {
            handle: Some(handle.to_string()),
            ..Default::default()
        };
        let profile = self.profile_repository.update(owner_id, patch).await?;
        tracing::info!(owner_id, handle, "handle updated");
        Ok(profile)
    }

    /// Sets the profile's display name.
    pub async fn update_display_name(&self, owner_id: &str, display_name: &str) -> Result<Profile> {
        let patch = ProfilePatch {
            display_name: Some(display_name.to_string()),
            ..Default::default()
        };
        self.profile_repository.update(owner_id, patch).await
    }

    async fn provision(&self, session: &Session, handle: &str) -> Result<Profile> {
        let mut profile = Profile::new(&session.identity_id, handle)?;
        profile.contact_address = session.contact_address.clone();
        let created = self.profile_repository.insert(&profile).await?;
        tracing::info!(
            profile_id = %created.id,
            handle = %created.handle,
            "profile provisioned on first sign-in"
        );
        Ok(created)
    }
}

/// Appends a short random suffix, keeping the handle within bounds.
fn salt_handle(handle: &str) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string()[..6].to_string();
    let trimmed: String = handle
        .chars()
        .take(linkdeck_core::profile::HANDLE_MAX_LEN - suffix.len() - 1)
        .collect();
    format!("{}-{}", trimmed, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_infrastructure::TomlProfileRepository;

    fn usecase(dir: &tempfile::TempDir) -> AccountUsecase {
        AccountUsecase::new(Arc::new(TomlProfileRepository::new(dir.path())))
    }

    #[tokio::test]
    async fn test_first_sign_in_provisions_profile() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);
        let session = Session::new("id-1").with_contact_address("alice@example.com");

        let profile = usecase.ensure_profile(&session).await.unwrap();
        assert_eq!(profile.id, "id-1");
        assert_eq!(profile.handle, "alice");
        assert_eq!(profile.contact_address.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_second_sign_in_reuses_profile() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);
        let session = Session::new("id-1").with_contact_address("alice@example.com");

        let first = usecase.ensure_profile(&session).await.unwrap();
        let second = usecase.ensure_profile(&session).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_contact_address_defaults_to_user() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);

        let profile = usecase
            .ensure_profile(&Session::new("id-1"))
            .await
            .unwrap();
        assert_eq!(profile.handle, "user");
    }

    #[tokio::test]
    async fn test_taken_default_handle_gets_salted() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);

        let a = Session::new("id-1").with_contact_address("alice@one.example");
        let b = Session::new("id-2").with_contact_address("alice@two.example");
        usecase.ensure_profile(&a).await.unwrap();
        let second = usecase.ensure_profile(&b).await.unwrap();

        assert_ne!(second.handle, "alice");
        assert!(second.handle.starts_with("alice-"));
        assert!(validate_handle(&second.handle).is_ok());
    }

    #[tokio::test]
    async fn test_update_handle_validates_before_store() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);
        let session = Session::new("id-1").with_contact_address("alice@example.com");
        usecase.ensure_profile(&session).await.unwrap();

        let err = usecase.update_handle("id-1", "a b").await.unwrap_err();
        assert!(err.is_validation());

        let renamed = usecase.update_handle("id-1", "alice_2").await.unwrap();
        assert_eq!(renamed.handle, "alice_2");
    }

    #[tokio::test]
    async fn test_update_handle_conflict_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let usecase = usecase(&dir);
        usecase
            .ensure_profile(&Session::new("id-1").with_contact_address("alice@example.com"))
            .await
            .unwrap();
        usecase
            .ensure_profile(&Session::new("id-2").with_contact_address("bob@example.com"))
            .await
            .unwrap();

        let err = usecase.update_handle("id-2", "alice").await.unwrap_err();
        assert!(err.is_conflict());
    }
}
