//! Medicine API

use std::path::Path;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::client::models::{Medicine, MedicineCreateRequest, MedicineUpdateRequest};
use crate::client::{MedTrackClient, RequestBody};
use crate::error::{Error, Result};

/// Multipart field name the upload endpoint expects
const IMAGE_FIELD: &str = "medicineImage";

/// Medicine operations, including dose tracking and image upload
#[async_trait]
pub trait MedicineApi: Send + Sync {
    /// All medicines across the user's profiles
    async fn list_medicines(&self) -> Result<Vec<Medicine>>;

    async fn list_profile_medicines(&self, profile_id: &str) -> Result<Vec<Medicine>>;

    async fn get_medicine(&self, medicine_id: &str) -> Result<Medicine>;

    async fn create_medicine(
        &self,
        profile_id: &str,
        request: &MedicineCreateRequest,
    ) -> Result<Medicine>;

    async fn update_medicine(
        &self,
        medicine_id: &str,
        request: &MedicineUpdateRequest,
    ) -> Result<Medicine>;

    async fn delete_medicine(&self, medicine_id: &str) -> Result<()>;

    /// Record one dose taken; the server decrements the quantity
    async fn take_dose(&self, medicine_id: &str) -> Result<Medicine>;

    /// Upload an image and return the URL the server stored it under
    async fn upload_medicine_image(&self, path: &Path) -> Result<String>;
}

#[async_trait]
impl MedicineApi for MedTrackClient {
    async fn list_medicines(&self) -> Result<Vec<Medicine>> {
        self.get_json("/api/medicines").await
    }

    async fn list_profile_medicines(&self, profile_id: &str) -> Result<Vec<Medicine>> {
        self.get_json(&format!("/api/medicines/profiles/{}/medicines", profile_id))
            .await
    }

    async fn get_medicine(&self, medicine_id: &str) -> Result<Medicine> {
        self.get_json(&format!("/api/medicines/{}", medicine_id))
            .await
    }

    async fn create_medicine(
        &self,
        profile_id: &str,
        request: &MedicineCreateRequest,
    ) -> Result<Medicine> {
        self.send_json(
            Method::POST,
            &format!("/api/medicines/profiles/{}/medicines", profile_id),
            request,
        )
        .await
    }

    async fn update_medicine(
        &self,
        medicine_id: &str,
        request: &MedicineUpdateRequest,
    ) -> Result<Medicine> {
        self.send_json(
            Method::PUT,
            &format!("/api/medicines/{}", medicine_id),
            request,
        )
        .await
    }

    async fn delete_medicine(&self, medicine_id: &str) -> Result<()> {
        self.send_empty(Method::DELETE, &format!("/api/medicines/{}", medicine_id))
            .await
    }

    async fn take_dose(&self, medicine_id: &str) -> Result<Medicine> {
        self.request(
            Method::POST,
            &format!("/api/medicines/{}/takedose", medicine_id),
            None,
            None,
        )
        .await?
        .json()
    }

    async fn upload_medicine_image(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(image_mime(path))
            .map_err(|e| Error::Other(format!("Invalid image type: {}", e)))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .request(
                Method::POST,
                "/api/medicines/upload-image",
                Some(RequestBody::Multipart(form)),
                None,
            )
            .await?;

        Ok(response.text().trim().to_string())
    }
}

/// Content type for an image file, by extension
fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
