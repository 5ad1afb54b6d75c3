use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::form::{FormValues, joined_services};

/// Literal status value the backend returns for an accepted request.
pub const SUCCESS_STATUS: &str = "success";

/// Profile data fetched from the identity SDK once per page load.
/// Field names match the `liff.getProfile()` payload, so this decodes
/// straight from the SDK response. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub picture_url: String,
}

/// The flat JSON body posted to the submission endpoint. Built fresh
/// on every submit attempt and not retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    pub furigana: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub area: String,
    pub services: String,
    pub time: String,
    pub message: String,
    pub timestamp: String,
    pub line_user_id: String,
    pub line_display_name: String,
    pub line_picture_url: String,
}

/// Merges the form snapshot with the cached session profile. The
/// session fields mirror whatever profile existed at initialization;
/// no session means empty strings, never missing keys.
pub fn build_payload(
    values: &FormValues,
    timestamp: String,
    profile: Option<&SessionProfile>,
) -> SubmissionPayload {
    SubmissionPayload {
        name: values.name.clone(),
        furigana: values.furigana.clone(),
        email: values.email.clone(),
        phone: values.phone.clone(),
        company: values.company.clone(),
        area: values.area.clone(),
        services: joined_services(&values.services),
        time: values.time.clone(),
        message: values.message.clone(),
        timestamp,
        line_user_id: profile.map(|p| p.user_id.clone()).unwrap_or_default(),
        line_display_name: profile.map(|p| p.display_name.clone()).unwrap_or_default(),
        line_picture_url: profile.map(|p| p.picture_url.clone()).unwrap_or_default(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitResponse {
    pub fn is_accepted(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Transport seam for the single POST a submission makes. `?Send`
/// because the production implementation runs futures on the
/// single-threaded WASM executor.
#[async_trait(?Send)]
pub trait SubmitTransport {
    type Error: std::fmt::Display;

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<SubmitResponse, Self::Error>;
}

/// How one submission attempt ended. Transport failures of any kind
/// (network, body read, decode) collapse into `Failed`; the caller
/// shows one generic message either way and only logs the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionVerdict {
    Accepted,
    Rejected { message: Option<String> },
    Failed { detail: String },
}

pub async fn deliver_payload<T: SubmitTransport>(
    transport: &T,
    payload: &SubmissionPayload,
) -> SubmissionVerdict {
    match transport.deliver(payload).await {
        Ok(response) if response.is_accepted() => SubmissionVerdict::Accepted,
        Ok(response) => SubmissionVerdict::Rejected {
            message: response.message,
        },
        Err(error) => SubmissionVerdict::Failed {
            detail: error.to_string(),
        },
    }
}

/// Submit-control lifecycle. Submitting is only entered from Idle for
/// a validated submission; every settle returns to Idle regardless of
/// outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    #[must_use]
    pub fn begin(self) -> SubmitPhase {
        SubmitPhase::Submitting
    }

    #[must_use]
    pub fn settle(self) -> SubmitPhase {
        SubmitPhase::Idle
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample_values() -> FormValues {
        FormValues {
            name: "山田 太郎".to_string(),
            furigana: "やまだ たろう".to_string(),
            email: "taro@example.co.jp".to_string(),
            phone: "090-1234-5678".to_string(),
            company: "山田運送".to_string(),
            area: "東京都".to_string(),
            time: "午前中".to_string(),
            message: "よろしくお願いします".to_string(),
            services: vec!["A".to_string(), "B".to_string()],
        }
    }

    fn sample_profile() -> SessionProfile {
        SessionProfile {
            user_id: "U1".to_string(),
            display_name: "Taro".to_string(),
            picture_url: "http://x/p.png".to_string(),
        }
    }

    struct FixedTransport {
        response: Result<SubmitResponse, String>,
        calls: Cell<u32>,
    }

    impl FixedTransport {
        fn new(response: Result<SubmitResponse, String>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SubmitTransport for FixedTransport {
        type Error = String;

        async fn deliver(
            &self,
            _payload: &SubmissionPayload,
        ) -> Result<SubmitResponse, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    #[test]
    fn payload_carries_session_profile_fields_verbatim() {
        let profile = sample_profile();
        let payload = build_payload(&sample_values(), "ts".to_string(), Some(&profile));
        assert_eq!(payload.line_user_id, "U1");
        assert_eq!(payload.line_display_name, "Taro");
        assert_eq!(payload.line_picture_url, "http://x/p.png");
    }

    #[test]
    fn payload_session_fields_are_empty_without_a_session() {
        let payload = build_payload(&sample_values(), "ts".to_string(), None);
        assert_eq!(payload.line_user_id, "");
        assert_eq!(payload.line_display_name, "");
        assert_eq!(payload.line_picture_url, "");
    }

    #[test]
    fn payload_joins_services_in_collection_order() {
        let mut values = sample_values();
        values.services = vec!["B".to_string(), "A".to_string()];
        let payload = build_payload(&values, "ts".to_string(), None);
        assert_eq!(payload.services, "B, A");
    }

    #[test]
    fn payload_serializes_with_the_exact_wire_keys() {
        let payload = build_payload(
            &sample_values(),
            "2026/8/29 12:34:56".to_string(),
            Some(&sample_profile()),
        );
        let value = serde_json::to_value(&payload).expect("payload serializes");
        let object = value.as_object().expect("payload is an object");
        let expected_keys = [
            "name",
            "furigana",
            "email",
            "phone",
            "company",
            "area",
            "services",
            "time",
            "message",
            "timestamp",
            "lineUserId",
            "lineDisplayName",
            "linePictureUrl",
        ];
        assert_eq!(object.len(), expected_keys.len());
        for key in expected_keys {
            assert!(object.contains_key(key), "missing wire key {key}");
            assert!(object[key].is_string(), "{key} must be a string");
        }
    }

    #[test]
    fn session_profile_decodes_from_sdk_payload() {
        let profile: SessionProfile = serde_json::from_str(
            r#"{"userId":"U1","displayName":"Taro","pictureUrl":"http://x/p.png"}"#,
        )
        .expect("profile decodes");
        assert_eq!(profile, sample_profile());
    }

    #[test]
    fn response_status_decides_acceptance() {
        let accepted: SubmitResponse =
            serde_json::from_str(r#"{"status":"success"}"#).expect("response decodes");
        assert!(accepted.is_accepted());

        let rejected: SubmitResponse =
            serde_json::from_str(r#"{"status":"error","message":"X"}"#).expect("response decodes");
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.message.as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn accepted_response_yields_accepted_verdict() {
        let transport = FixedTransport::new(Ok(SubmitResponse {
            status: "success".to_string(),
            message: None,
        }));
        let payload = build_payload(&sample_values(), "ts".to_string(), None);
        let verdict = deliver_payload(&transport, &payload).await;
        assert_eq!(verdict, SubmissionVerdict::Accepted);
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn non_success_status_yields_rejected_with_message() {
        let transport = FixedTransport::new(Ok(SubmitResponse {
            status: "error".to_string(),
            message: Some("X".to_string()),
        }));
        let payload = build_payload(&sample_values(), "ts".to_string(), None);
        let verdict = deliver_payload(&transport, &payload).await;
        assert_eq!(
            verdict,
            SubmissionVerdict::Rejected {
                message: Some("X".to_string())
            }
        );
    }

    #[tokio::test]
    async fn transport_errors_collapse_into_failed() {
        let transport = FixedTransport::new(Err("connection reset".to_string()));
        let payload = build_payload(&sample_values(), "ts".to_string(), None);
        let verdict = deliver_payload(&transport, &payload).await;
        assert_eq!(
            verdict,
            SubmissionVerdict::Failed {
                detail: "connection reset".to_string()
            }
        );
    }

    #[test]
    fn submit_phase_begins_and_settles() {
        let phase = SubmitPhase::Idle;
        let submitting = phase.begin();
        assert!(submitting.is_submitting());
        assert_eq!(submitting.settle(), SubmitPhase::Idle);
        assert_eq!(SubmitPhase::Idle.settle(), SubmitPhase::Idle);
    }
}
