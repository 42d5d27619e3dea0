//! HTTP plumbing shared by every resource accessor.
//!
//! Requests go through `gloo_net`; every response body is unwrapped through
//! the envelope normalizer in `contracts::shared::envelope`, so accessors hand
//! plain `T` / `Page<T>` to the views.

use contracts::shared::{backend_message, decode_data, decode_list, decode_page, Page};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

use super::api_utils::api_url;

/// Everything that can go wrong between a button press and a usable response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Text for a notification: the backend's own message when it sent one,
    /// the validation text for client-side checks, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Verbs used for mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

/// Successful mutation response
#[derive(Debug, Clone, Default)]
pub struct Ack {
    pub message: Option<String>,
    body: String,
}

impl Ack {
    fn from_body(body: String) -> Self {
        Self {
            message: backend_message(&body),
            body,
        }
    }

    /// Entity echoed back by the backend, if the caller needs it
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        decode_data(&self.body).map_err(ApiError::Decode)
    }
}

/// Appends `query` to `path` as a URL query string. Fields skipped by serde
/// never show up, so optional filters are simply left out.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Validation(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status,
            message: backend_message(&body),
        })
    }
}

async fn fetch_body(path: &str) -> Result<String, ApiError> {
    let url = api_url(path);
    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} failed: {}", url, e);
        ApiError::Transport(e.to_string())
    })?;
    read_body(response).await.inspect_err(|e| {
        log::error!("GET {}: {}", url, e);
    })
}

/// GET a single entity, `{data: T}` or bare `T`
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = fetch_body(path).await?;
    decode_data(&body).map_err(ApiError::Decode)
}

/// GET a page of records with query parameters
pub async fn get_page<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<Page<T>, ApiError> {
    let body = fetch_body(&with_query(path, query)?).await?;
    decode_page(&body).map_err(ApiError::Decode)
}

/// GET a whole collection, dropping any pagination block
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let body = fetch_body(path).await?;
    decode_list(&body).map_err(ApiError::Decode)
}

/// Mutation with a JSON body
pub async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Ack, ApiError> {
    let url = api_url(path);
    let request = method
        .builder(&url)
        .json(body)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::error!("{:?} {} failed: {}", method, url, e);
        ApiError::Transport(e.to_string())
    })?;
    let body = read_body(response).await.inspect_err(|e| {
        log::error!("{:?} {}: {}", method, url, e);
    })?;
    Ok(Ack::from_body(body))
}

/// Mutation with a multipart body; the browser sets the boundary header.
pub async fn send_form(method: Method, path: &str, form: FormData) -> Result<Ack, ApiError> {
    let url = api_url(path);
    let request = method
        .builder(&url)
        .body(form)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::error!("{:?} {} failed: {}", method, url, e);
        ApiError::Transport(e.to_string())
    })?;
    let body = read_body(response).await.inspect_err(|e| {
        log::error!("{:?} {}: {}", method, url, e);
    })?;
    Ok(Ack::from_body(body))
}

/// DELETE without a body
pub async fn delete(path: &str) -> Result<Ack, ApiError> {
    let url = api_url(path);
    let response = Request::delete(&url).send().await.map_err(|e| {
        log::error!("DELETE {} failed: {}", url, e);
        ApiError::Transport(e.to_string())
    })?;
    let body = read_body(response).await.inspect_err(|e| {
        log::error!("DELETE {}: {}", url, e);
    })?;
    Ok(Ack::from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_consultant::ConsultantListQuery;
    use contracts::enums::VerificationStatus;
    use contracts::shared::PageQuery;

    #[test]
    fn query_omits_unset_filters() {
        let query = ConsultantListQuery {
            page_no: 2,
            verification_status: None,
            search_text: None,
        };
        assert_eq!(
            with_query("/consultation/filter", &query).unwrap(),
            "/consultation/filter?pageNo=2"
        );
    }

    #[test]
    fn query_carries_status_and_search() {
        let query = ConsultantListQuery {
            page_no: 1,
            verification_status: Some(VerificationStatus::RequestChanges),
            search_text: Some("acme motors".into()),
        };
        let url = with_query("/consultation/filter", &query).unwrap();
        assert!(url.starts_with("/consultation/filter?pageNo=1"));
        assert!(url.contains("verificationStatus=REQUEST_CHANGES"));
        assert!(url.contains("searchText=acme"));
    }

    #[test]
    fn page_query_is_camel_case() {
        assert_eq!(with_query("/user", &PageQuery { page_no: 3 }).unwrap(), "/user?pageNo=3");
    }

    #[test]
    fn user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Remark is mandatory".into()),
        };
        assert_eq!(err.user_message("Action failed"), "Remark is mandatory");

        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Action failed"), "Action failed");
        assert_eq!(
            ApiError::Transport("offline".into()).user_message("Action failed"),
            "Action failed"
        );
    }
}
