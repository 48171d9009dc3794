//! Profile API

use async_trait::async_trait;
use reqwest::Method;

use crate::client::MedTrackClient;
use crate::client::models::{Profile, ProfileRequest};
use crate::error::Result;

/// Profile CRUD operations
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<Profile>>;

    async fn get_profile(&self, profile_id: &str) -> Result<Profile>;

    async fn create_profile(&self, name: &str) -> Result<Profile>;

    async fn update_profile(&self, profile_id: &str, name: &str) -> Result<Profile>;

    async fn delete_profile(&self, profile_id: &str) -> Result<()>;
}

#[async_trait]
impl ProfileApi for MedTrackClient {
    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.get_json("/api/profiles").await
    }

    async fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.get_json(&format!("/api/profiles/{}", profile_id))
            .await
    }

    async fn create_profile(&self, name: &str) -> Result<Profile> {
        let body = ProfileRequest {
            name: name.to_string(),
        };
        self.send_json(Method::POST, "/api/profiles", &body).await
    }

    async fn update_profile(&self, profile_id: &str, name: &str) -> Result<Profile> {
        let body = ProfileRequest {
            name: name.to_string(),
        };
        self.send_json(Method::PUT, &format!("/api/profiles/{}", profile_id), &body)
            .await
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api/profiles/{}", profile_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::EventBus;
    use crate::session::{CredentialStore, MemoryStore};
    use mockito::Matcher;
    use std::sync::Arc;

    fn client(url: &str) -> MedTrackClient {
        let credentials =
            CredentialStore::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()));
        credentials.store_credential("jwt", true).unwrap();
        MedTrackClient::new(url, credentials, EventBus::default()).unwrap()
    }

    const PROFILE: &str =
        r#"{"id":"p1","userId":"u1","name":"Ann","createdAt":"2025-01-01T00:00:00Z"}"#;

    #[tokio::test]
    async fn test_list_and_get_profiles() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/api/profiles")
            .match_header("authorization", "Bearer jwt")
            .with_status(200)
            .with_body(format!("[{}]", PROFILE))
            .create_async()
            .await;
        let get = server
            .mock("GET", "/api/profiles/p1")
            .with_status(200)
            .with_body(PROFILE)
            .create_async()
            .await;

        let client = client(&server.url());

        let profiles = client.list_profiles().await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Ann");

        let profile = client.get_profile("p1").await.unwrap();
        assert_eq!(profile.user_id, "u1");

        list.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_update_delete_profile() {
        let mut server = mockito::Server::new_async().await;
        let create = server
            .mock("POST", "/api/profiles")
            .match_body(Matcher::Json(serde_json::json!({ "name": "Ann" })))
            .with_status(201)
            .with_body(PROFILE)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/profiles/p1")
            .match_body(Matcher::Json(serde_json::json!({ "name": "Annie" })))
            .with_status(200)
            .with_body(r#"{"id":"p1","userId":"u1","name":"Annie"}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/profiles/p1")
            .with_status(204)
            .create_async()
            .await;

        let client = client(&server.url());

        assert_eq!(client.create_profile("Ann").await.unwrap().id, "p1");
        assert_eq!(
            client.update_profile("p1", "Annie").await.unwrap().name,
            "Annie"
        );
        client.delete_profile("p1").await.unwrap();

        create.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }
}
