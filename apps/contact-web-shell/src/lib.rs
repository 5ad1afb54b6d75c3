#![allow(clippy::needless_pass_by_value)]

#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};

    use contact_client_core::{
        FieldId, FormValues, REQUIRED_FIELDS, SessionProfile, Severity, SubmissionPayload,
        SubmissionVerdict, SubmitPhase, SubmitResponse, SubmitTransport, ValidationIssue,
        ValidationReport, auto_hide_delay, build_payload, deliver_payload, validate,
    };
    use gloo_timers::future::sleep;
    use serde::Serialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

    use crate::wasm_constants::*;

    mod dom;
    mod liff;
    mod network;
    mod presenter;

    use dom::*;
    use liff::establish_session;
    use network::HttpSubmitTransport;
    use presenter::show_message;

    thread_local! {
        static SESSION_PROFILE: RefCell<Option<SessionProfile>> = const { RefCell::new(None) };
        static SUBMIT_PHASE: Cell<SubmitPhase> = const { Cell::new(SubmitPhase::Idle) };
        static MESSAGE_GENERATION: Cell<u64> = const { Cell::new(0) };
        static FORM_SUBMIT_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static FIELD_INPUT_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct SessionStateSnapshot {
        logged_in: bool,
        profile: Option<SessionProfile>,
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        spawn_local(async {
            if let Err(error) = boot().await {
                web_sys::console::error_1(&JsValue::from_str(&error));
            }
        });
    }

    /// Snapshot of the cached LIFF session for host-page diagnostics.
    #[wasm_bindgen]
    pub fn session_state_json() -> String {
        SESSION_PROFILE.with(|slot| {
            let profile = slot.borrow().clone();
            let snapshot = SessionStateSnapshot {
                logged_in: profile.is_some(),
                profile,
            };
            serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
        })
    }

    #[wasm_bindgen]
    pub fn submit_phase_label() -> String {
        SUBMIT_PHASE.with(|phase| {
            if phase.get().is_submitting() {
                "submitting".to_string()
            } else {
                "idle".to_string()
            }
        })
    }

    async fn boot() -> Result<(), String> {
        let document = document()?;
        ensure_form_dom(&document)?;
        // Handlers go in before the session resolves; a fast user can
        // submit while the LIFF handshake is still pending.
        install_form_handlers(&document)?;
        initialize_session(&document).await;
        Ok(())
    }

    /// Establishes the LIFF session once per page load. Failures are
    /// reported and the form stays usable without the pre-fill.
    async fn initialize_session(document: &Document) {
        match establish_session().await {
            Ok(Some(profile)) => {
                web_sys::console::log_1(&JsValue::from_str(&format!(
                    "LIFF session established for {}",
                    profile.user_id
                )));
                if !profile.display_name.is_empty() {
                    prefill_name_if_blank(document, &profile.display_name);
                }
                SESSION_PROFILE.with(|slot| *slot.borrow_mut() = Some(profile));
            }
            Ok(None) => {
                web_sys::console::log_1(&JsValue::from_str("LIFF session: not logged in"));
            }
            Err(error) => {
                web_sys::console::error_1(&JsValue::from_str(&error));
                show_message(MESSAGE_SESSION_INIT_FAILED, Severity::Error);
            }
        }
    }

    pub(crate) fn handle_submit(event: web_sys::Event) {
        event.prevent_default();
        if let Err(error) = run_submit_flow() {
            web_sys::console::error_1(&JsValue::from_str(&error));
        }
    }

    fn run_submit_flow() -> Result<(), String> {
        let document = document()?;
        let form = delivery_form(&document)?;
        let values = read_form_values(&document, &form)?;
        let report = validate(&values);
        apply_validation_feedback(&document, &report);
        if !report.is_submittable() {
            return Ok(());
        }

        SUBMIT_PHASE.with(|phase| phase.set(phase.get().begin()));
        if let Err(error) = set_submit_busy(&document) {
            SUBMIT_PHASE.with(|phase| phase.set(phase.get().settle()));
            return Err(error);
        }

        let profile = SESSION_PROFILE.with(|slot| slot.borrow().clone());
        let payload = build_payload(&values, locale_timestamp(), profile.as_ref());

        spawn_local(async move {
            let transport = HttpSubmitTransport::new(SUBMIT_ENDPOINT_URL);
            match deliver_payload(&transport, &payload).await {
                SubmissionVerdict::Accepted => {
                    show_message(MESSAGE_SUBMIT_SUCCESS, Severity::Success);
                    if let Ok(document) = document() {
                        if let Ok(form) = delivery_form(&document) {
                            form.reset();
                        }
                    }
                }
                SubmissionVerdict::Rejected { message } => {
                    if let Some(message) = message {
                        web_sys::console::error_1(&JsValue::from_str(&format!(
                            "submission rejected: {message}"
                        )));
                    }
                    show_message(MESSAGE_SUBMIT_FAILURE, Severity::Error);
                }
                SubmissionVerdict::Failed { detail } => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "submission failed: {detail}"
                    )));
                    show_message(MESSAGE_SUBMIT_FAILURE, Severity::Error);
                }
            }

            // Runs on every settle path so the control never sticks.
            if let Ok(document) = document() {
                restore_submit_control(&document);
            }
            SUBMIT_PHASE.with(|phase| phase.set(phase.get().settle()));
        });

        Ok(())
    }

    fn locale_timestamp() -> String {
        js_sys::Date::new_0()
            .to_locale_string("ja-JP", &JsValue::UNDEFINED)
            .into()
    }
}
