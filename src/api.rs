//! REST backend client and background request workers.
//!
//! All four backend operations run on one-shot background threads and report
//! their outcome over an MPSC channel, so the render loop never blocks on
//! the network. Requests are not serialized against each other and are never
//! cancelled; whichever response lands last wins.

use std::sync::mpsc::Sender;
use std::thread;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::constants;
use crate::state::{FoodDraft, FoodPlate};

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Body of `POST /foods`. The backend assigns the id; availability always
/// starts out true.
#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    name: &'a str,
    image: &'a str,
    price: &'a str,
    description: &'a str,
    available: bool,
}

impl<'a> CreateBody<'a> {
    fn from_draft(draft: &'a FoodDraft) -> Self {
        Self {
            name: &draft.name,
            image: &draft.image,
            price: &draft.price,
            description: &draft.description,
            available: true,
        }
    }
}

/// Blocking HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        // Url::join drops the last path segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http = Client::builder()
            .timeout(constants::API_TIMEOUT)
            .user_agent(format!(
                "{}/{}",
                constants::APP_NAME,
                constants::APP_VERSION
            ))
            .build()?;
        Ok(Self { http, base })
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        Ok(self.base.join(constants::FOODS_PATH)?)
    }

    fn record_url(&self, id: u64) -> Result<Url, ApiError> {
        Ok(self.base.join(&format!("{}/{id}", constants::FOODS_PATH))?)
    }

    /// `GET /foods` — the full collection.
    pub fn list_plates(&self) -> Result<Vec<FoodPlate>, ApiError> {
        let response = self.http.get(self.collection_url()?).send()?;
        Ok(check(response)?.json()?)
    }

    /// `POST /foods` — creates a plate from the draft, available by default.
    /// Returns the record as stored, including the server-assigned id.
    pub fn create_plate(&self, draft: &FoodDraft) -> Result<FoodPlate, ApiError> {
        let response = self
            .http
            .post(self.collection_url()?)
            .json(&CreateBody::from_draft(draft))
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// `PUT /foods/{id}` — full replacement of one record.
    pub fn update_plate(&self, plate: &FoodPlate) -> Result<FoodPlate, ApiError> {
        let response = self
            .http
            .put(self.record_url(plate.id)?)
            .json(plate)
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// `DELETE /foods/{id}`.
    pub fn delete_plate(&self, id: u64) -> Result<(), ApiError> {
        let response = self.http.delete(self.record_url(id)?).send()?;
        check(response)?;
        Ok(())
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

/// Outcomes delivered from request workers to the main application.
#[derive(Debug)]
pub enum ApiUpdate {
    /// Full collection fetched; replaces the local list wholesale.
    Loaded(Vec<FoodPlate>),
    LoadFailed(String),
    /// Backend stored a new plate; carries the server-assigned id.
    Created(FoodPlate),
    CreateFailed(String),
    /// Backend stored a replacement record.
    Updated(FoodPlate),
    UpdateFailed(String),
    /// Record with this id is gone on the backend.
    Deleted(u64),
    DeleteFailed(String),
}

/// Fetches the collection on a background thread.
pub fn spawn_load(client: &ApiClient, tx: &Sender<ApiUpdate>) {
    run_worker(client, tx, |client| match client.list_plates() {
        Ok(plates) => ApiUpdate::Loaded(plates),
        Err(err) => {
            tracing::error!("load failed: {err}");
            ApiUpdate::LoadFailed(err.to_string())
        }
    });
}

/// Creates a plate on a background thread.
pub fn spawn_create(client: &ApiClient, tx: &Sender<ApiUpdate>, draft: FoodDraft) {
    run_worker(client, tx, move |client| {
        match client.create_plate(&draft) {
            Ok(plate) => ApiUpdate::Created(plate),
            Err(err) => {
                tracing::error!("create failed: {err}");
                ApiUpdate::CreateFailed(err.to_string())
            }
        }
    });
}

/// Replaces a plate on a background thread.
pub fn spawn_update(client: &ApiClient, tx: &Sender<ApiUpdate>, plate: FoodPlate) {
    run_worker(client, tx, move |client| {
        match client.update_plate(&plate) {
            Ok(plate) => ApiUpdate::Updated(plate),
            Err(err) => {
                tracing::error!("update of plate {} failed: {err}", plate.id);
                ApiUpdate::UpdateFailed(err.to_string())
            }
        }
    });
}

/// Deletes a plate on a background thread.
pub fn spawn_delete(client: &ApiClient, tx: &Sender<ApiUpdate>, id: u64) {
    run_worker(client, tx, move |client| match client.delete_plate(id) {
        Ok(()) => ApiUpdate::Deleted(id),
        Err(err) => {
            tracing::error!("delete of plate {id} failed: {err}");
            ApiUpdate::DeleteFailed(err.to_string())
        }
    });
}

fn run_worker<F>(client: &ApiClient, tx: &Sender<ApiUpdate>, job: F)
where
    F: FnOnce(&ApiClient) -> ApiUpdate + Send + 'static,
{
    let client = client.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        // Receiver may be gone during shutdown; nothing to do then.
        let _ = tx.send(job(&client));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_defaults_available() {
        let draft = FoodDraft {
            name: "Pizza".to_string(),
            image: "img".to_string(),
            price: "19.90".to_string(),
            description: "desc".to_string(),
        };
        let body = serde_json::to_value(CreateBody::from_draft(&draft)).expect("encode");
        assert_eq!(body["available"], true);
        assert_eq!(body["name"], "Pizza");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_urls_from_bare_host() {
        let client = ApiClient::new("http://localhost:3333").expect("client");
        assert_eq!(
            client.collection_url().expect("url").as_str(),
            "http://localhost:3333/foods"
        );
        assert_eq!(
            client.record_url(7).expect("url").as_str(),
            "http://localhost:3333/foods/7"
        );
    }

    #[test]
    fn test_urls_keep_base_path() {
        let client = ApiClient::new("http://example.com/api/v1").expect("client");
        assert_eq!(
            client.record_url(2).expect("url").as_str(),
            "http://example.com/api/v1/foods/2"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
