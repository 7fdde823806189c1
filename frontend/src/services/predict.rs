//! HTTP client for the prediction endpoints.
//!
//! One call sends one multipart request built from the upload form and
//! decodes the JSON array of per-file predictions.

use gloo_net::http::{Method, RequestBuilder};
use web_sys::{File, FileList, FormData, HtmlFormElement};

use crate::config::{BACKEND_URL, FILE_FIELD, SUCCESS_STATUS};
use crate::types::{PredictionResponse, SubmitError, SubmitResult};

/// Where and how a form is sent, from its `method` and `action` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTarget {
    pub method: Method,
    pub url: String,
}

impl SubmitTarget {
    /// Resolve a target from raw attribute values.
    ///
    /// Missing or unknown methods fall back to POST; relative actions are
    /// resolved against [`BACKEND_URL`].
    pub fn from_attributes(method: Option<&str>, action: Option<&str>) -> Self {
        let method = method
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .and_then(|m| match m.to_ascii_uppercase().as_str() {
                "GET" => Some(Method::GET),
                "POST" => Some(Method::POST),
                "PUT" => Some(Method::PUT),
                "PATCH" => Some(Method::PATCH),
                _ => None,
            })
            .unwrap_or(Method::POST);

        let action = action.map(str::trim).filter(|a| !a.is_empty()).unwrap_or("/");
        let url = if action.starts_with("http://") || action.starts_with("https://") {
            action.to_string()
        } else {
            format!("{}{}", BACKEND_URL, action)
        };

        Self { method, url }
    }

    pub fn from_form(form: &HtmlFormElement) -> Self {
        Self::from_attributes(
            form.get_attribute("method").as_deref(),
            form.get_attribute("action").as_deref(),
        )
    }
}

/// `true` for statuses that count as a completed submission.
pub fn is_success_status(status: u16) -> bool {
    SUCCESS_STATUS.contains(&status)
}

/// Decode a success body into per-file predictions.
pub fn decode_response(body: &str) -> SubmitResult<PredictionResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Collect the files of a `FileList` in order.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Build the multipart payload: every form field, with the file field
/// holding exactly `files`.
pub fn build_payload(form: &HtmlFormElement, files: &[File]) -> SubmitResult<FormData> {
    let form_data = FormData::new_with_form(form)
        .map_err(|e| SubmitError::Payload(format!("Failed to create FormData: {:?}", e)))?;

    form_data.delete(FILE_FIELD);
    for file in files {
        form_data
            .append_with_blob_and_filename(FILE_FIELD, file, &file.name())
            .map_err(|e| SubmitError::Payload(format!("Failed to append file: {:?}", e)))?;
    }

    Ok(form_data)
}

/// Send `payload` to `target` and decode the predictions.
pub async fn submit_form(payload: FormData, target: &SubmitTarget) -> SubmitResult<PredictionResponse> {
    log::debug!("Sending prediction request: {:?} {}", target.method, target.url);

    let request = RequestBuilder::new(&target.url)
        .method(target.method.clone())
        .body(payload)
        .map_err(|e| SubmitError::Payload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response.text().await;

    if !is_success_status(status) {
        return Err(SubmitError::Server {
            status,
            body: body.unwrap_or_else(|_| "Unknown error".to_string()),
        });
    }

    let body = body.map_err(|e| SubmitError::Transport(format!("Failed to read response: {}", e)))?;
    decode_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_to_post() {
        let target = SubmitTarget::from_attributes(None, Some("/chooseModel"));
        assert_eq!(target.method, Method::POST);
        assert_eq!(target.url, format!("{}/chooseModel", BACKEND_URL));
    }

    #[test]
    fn test_target_method_is_case_insensitive() {
        let target = SubmitTarget::from_attributes(Some("put"), Some("/"));
        assert_eq!(target.method, Method::PUT);
    }

    #[test]
    fn test_target_unknown_method_falls_back_to_post() {
        let target = SubmitTarget::from_attributes(Some("dialog"), Some("/"));
        assert_eq!(target.method, Method::POST);
    }

    #[test]
    fn test_target_keeps_absolute_action() {
        let target = SubmitTarget::from_attributes(Some("post"), Some("https://predict.example.org/"));
        assert_eq!(target.url, "https://predict.example.org/");
    }

    #[test]
    fn test_target_without_action_posts_to_root() {
        let target = SubmitTarget::from_attributes(Some(" "), None);
        assert_eq!(target.method, Method::POST);
        assert_eq!(target.url, format!("{}/", BACKEND_URL));
    }

    #[test]
    fn test_success_range() {
        assert!(is_success_status(200));
        assert!(is_success_status(302));
        assert!(!is_success_status(199));
        assert!(!is_success_status(400));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_decode_response() {
        let json = r#"[
            {"filename": "a.png", "image": "iVBORw0KGgo=", "mask": [{"mask_data": "iVBORw0KGgo=", "model_name": "m1"}]},
            {"filename": "b.png", "image": "iVBORw0KGgo=", "mask": []}
        ]"#;
        let response = decode_response(json).unwrap();
        assert_eq!(response.len(), 2);
        assert!(response[1].mask.is_empty());
    }

    #[test]
    fn test_decode_malformed_body() {
        assert!(matches!(decode_response("<html>"), Err(SubmitError::MalformedBody(_))));
        assert!(matches!(
            decode_response(r#"[{"filename": "a.png"}]"#),
            Err(SubmitError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_response("[]").unwrap().is_empty());
    }
}
