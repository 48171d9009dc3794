//! Global medicine catalog API

use async_trait::async_trait;
use reqwest::Method;

use crate::client::models::{GlobalMedicine, GlobalMedicineRequest};
use crate::client::{MedTrackClient, RequestConfig};
use crate::error::Result;

/// Read and curate the shared medicine catalog
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_catalog(&self) -> Result<Vec<GlobalMedicine>>;

    async fn get_catalog_entry(&self, id: &str) -> Result<GlobalMedicine>;

    /// Server-side name search
    async fn search_catalog(&self, name: &str) -> Result<Vec<GlobalMedicine>>;

    async fn catalog_by_category(&self, category: &str) -> Result<Vec<GlobalMedicine>>;

    async fn create_catalog_entry(&self, request: &GlobalMedicineRequest)
    -> Result<GlobalMedicine>;

    async fn update_catalog_entry(
        &self,
        id: &str,
        request: &GlobalMedicineRequest,
    ) -> Result<GlobalMedicine>;

    async fn delete_catalog_entry(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl CatalogApi for MedTrackClient {
    async fn list_catalog(&self) -> Result<Vec<GlobalMedicine>> {
        self.get_json("/api/global-medicines").await
    }

    async fn get_catalog_entry(&self, id: &str) -> Result<GlobalMedicine> {
        self.get_json(&format!("/api/global-medicines/{}", id))
            .await
    }

    async fn search_catalog(&self, name: &str) -> Result<Vec<GlobalMedicine>> {
        self.get_json_with(
            "/api/global-medicines/search",
            RequestConfig::new().query("name", name),
        )
        .await
    }

    async fn catalog_by_category(&self, category: &str) -> Result<Vec<GlobalMedicine>> {
        self.get_json(&format!(
            "/api/global-medicines/category/{}",
            urlencoding::encode(category)
        ))
        .await
    }

    async fn create_catalog_entry(
        &self,
        request: &GlobalMedicineRequest,
    ) -> Result<GlobalMedicine> {
        self.send_json(Method::POST, "/api/global-medicines", request)
            .await
    }

    async fn update_catalog_entry(
        &self,
        id: &str,
        request: &GlobalMedicineRequest,
    ) -> Result<GlobalMedicine> {
        self.send_json(
            Method::PUT,
            &format!("/api/global-medicines/{}", id),
            request,
        )
        .await
    }

    async fn delete_catalog_entry(&self, id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api/global-medicines/{}", id))
            .await
    }
}
