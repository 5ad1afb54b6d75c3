pub mod form;
pub mod presenter;
pub mod submission;
pub mod validate;

pub use form::{FieldId, FormValues, REQUIRED_FIELDS, joined_services};
pub use presenter::{MESSAGE_AUTO_HIDE_DELAY, Severity, auto_hide_delay};
pub use submission::{
    SUCCESS_STATUS, SessionProfile, SubmissionPayload, SubmissionVerdict, SubmitPhase,
    SubmitResponse, SubmitTransport, build_payload, deliver_payload,
};
pub use validate::{ValidationIssue, ValidationReport, email_shape_is_valid, validate};
