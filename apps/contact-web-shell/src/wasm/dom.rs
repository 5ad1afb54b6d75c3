use super::*;

use web_sys::{Element, FormData};

pub(super) fn document() -> Result<Document, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn delivery_form(document: &Document) -> Result<HtmlFormElement, String> {
    document
        .get_element_by_id(FORM_ID)
        .ok_or_else(|| "missing delivery form".to_string())?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| "delivery form is not HtmlFormElement".to_string())
}

/// Builds the form surface when the host page does not ship it and
/// reuses the existing markup when it does.
pub(super) fn ensure_form_dom(document: &Document) -> Result<(), String> {
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    if document.get_element_by_id(MESSAGE_REGION_ID).is_none() {
        let region = create_html_element(document, "div", "message region")?;
        region.set_id(MESSAGE_REGION_ID);
        region.set_class_name("message");
        let _ = region.style().set_property("display", "none");
        body.append_child(&region)
            .map_err(|_| "failed to append message region".to_string())?;
    }

    if document.get_element_by_id(FORM_ID).is_some() {
        return Ok(());
    }

    let form = document
        .create_element("form")
        .map_err(|_| "failed to create delivery form".to_string())?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| "delivery form is not HtmlFormElement".to_string())?;
    form.set_id(FORM_ID);
    // Validation is this shell's job, not the browser's.
    form.set_no_validate(true);

    for field in [
        FieldId::Name,
        FieldId::Furigana,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Area,
    ] {
        append_text_field(document, &form, field)?;
    }

    append_services_group(document, &form)?;
    append_time_select(document, &form)?;
    append_message_field(document, &form)?;
    append_submit_button(document, &form)?;

    body.append_child(&form)
        .map_err(|_| "failed to append delivery form".to_string())?;
    Ok(())
}

fn create_html_element(
    document: &Document,
    tag: &str,
    what: &str,
) -> Result<HtmlElement, String> {
    document
        .create_element(tag)
        .map_err(|_| format!("failed to create {what}"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("{what} is not HtmlElement"))
}

fn append_text_field(
    document: &Document,
    form: &HtmlFormElement,
    field: FieldId,
) -> Result<(), String> {
    let label = create_html_element(document, "label", "field label")?;
    let _ = label.set_attribute("for", field.as_str());
    label.set_text_content(Some(field_label(field)));
    let _ = form.append_child(&label);

    let input = document
        .create_element("input")
        .map_err(|_| format!("failed to create {} input", field.as_str()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("{} input is not HtmlInputElement", field.as_str()))?;
    input.set_id(field.as_str());
    input.set_name(field.as_str());
    input.set_type(field_input_type(field));
    let _ = input
        .style()
        .set_property("border", &format!("1px solid {DEFAULT_BORDER_COLOR}"));
    form.append_child(&input)
        .map_err(|_| format!("failed to append {} input", field.as_str()))?;
    Ok(())
}

fn append_services_group(document: &Document, form: &HtmlFormElement) -> Result<(), String> {
    let group = create_html_element(document, "div", "services group")?;
    let _ = group.set_attribute("role", "group");
    group.set_text_content(Some("ご希望のサービス"));

    for option in SERVICE_OPTIONS {
        let label = create_html_element(document, "label", "service option label")?;
        let checkbox = document
            .create_element("input")
            .map_err(|_| "failed to create service checkbox".to_string())?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| "service checkbox is not HtmlInputElement".to_string())?;
        checkbox.set_type("checkbox");
        checkbox.set_name(SERVICES_GROUP_NAME);
        checkbox.set_value(option);
        let _ = label.append_child(&checkbox);

        let caption = create_html_element(document, "span", "service option caption")?;
        caption.set_text_content(Some(option));
        let _ = label.append_child(&caption);
        let _ = group.append_child(&label);
    }

    form.append_child(&group)
        .map_err(|_| "failed to append services group".to_string())?;
    Ok(())
}

fn append_time_select(document: &Document, form: &HtmlFormElement) -> Result<(), String> {
    let label = create_html_element(document, "label", "time label")?;
    let _ = label.set_attribute("for", FieldId::Time.as_str());
    label.set_text_content(Some(field_label(FieldId::Time)));
    let _ = form.append_child(&label);

    let select = document
        .create_element("select")
        .map_err(|_| "failed to create time select".to_string())?;
    select.set_id(FieldId::Time.as_str());
    let _ = select.set_attribute("name", FieldId::Time.as_str());
    for option_text in TIME_SLOT_OPTIONS {
        let option = document
            .create_element("option")
            .map_err(|_| "failed to create time option".to_string())?;
        let _ = option.set_attribute("value", option_text);
        option.set_text_content(Some(option_text));
        let _ = select.append_child(&option);
    }
    form.append_child(&select)
        .map_err(|_| "failed to append time select".to_string())?;
    Ok(())
}

fn append_message_field(document: &Document, form: &HtmlFormElement) -> Result<(), String> {
    let label = create_html_element(document, "label", "message label")?;
    let _ = label.set_attribute("for", MESSAGE_FIELD_ELEMENT_ID);
    label.set_text_content(Some(field_label(FieldId::Message)));
    let _ = form.append_child(&label);

    let textarea = document
        .create_element("textarea")
        .map_err(|_| "failed to create message textarea".to_string())?;
    textarea.set_id(MESSAGE_FIELD_ELEMENT_ID);
    let _ = textarea.set_attribute("name", FieldId::Message.as_str());
    let _ = textarea.set_attribute("rows", "5");
    form.append_child(&textarea)
        .map_err(|_| "failed to append message textarea".to_string())?;
    Ok(())
}

fn append_submit_button(document: &Document, form: &HtmlFormElement) -> Result<(), String> {
    let button = document
        .create_element("button")
        .map_err(|_| "failed to create submit button".to_string())?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| "submit control is not HtmlButtonElement".to_string())?;
    button.set_type("submit");
    button.set_class_name("submit-button");

    let label = create_html_element(document, "span", "submit button label")?;
    label.set_class_name("button-text");
    label.set_text_content(Some(SUBMIT_LABEL_IDLE));
    let _ = button.append_child(&label);

    form.append_child(&button)
        .map_err(|_| "failed to append submit button".to_string())?;
    Ok(())
}

fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "お名前",
        FieldId::Furigana => "ふりがな",
        FieldId::Email => "メールアドレス",
        FieldId::Phone => "電話番号",
        FieldId::Company => "会社名",
        FieldId::Area => "お住まいの地域",
        FieldId::Time => "ご希望の時間帯",
        FieldId::Message => "お問い合わせ内容",
    }
}

fn field_input_type(field: FieldId) -> &'static str {
    match field {
        FieldId::Email => "email",
        FieldId::Phone => "tel",
        _ => "text",
    }
}

/// Registers the submit handler and one input handler per required
/// field. Installation is idempotent; the closures live in
/// thread-local slots for the lifetime of the page.
pub(super) fn install_form_handlers(document: &Document) -> Result<(), String> {
    let form = document
        .get_element_by_id(FORM_ID)
        .ok_or_else(|| "missing delivery form".to_string())?;

    FORM_SUBMIT_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                handle_submit(event);
            },
        ));
        let _ = form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    FIELD_INPUT_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for field in REQUIRED_FIELDS {
            let Some(input) = document.get_element_by_id(field.as_str()) else {
                continue;
            };
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    clear_border_when_filled(&event);
                },
            ));
            let _ =
                input.add_event_listener_with_callback("input", callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });

    Ok(())
}

// Real-time feedback: typing into a flagged field clears the invalid
// border as soon as it is non-blank.
fn clear_border_when_filled(event: &web_sys::Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Some(input) = target.dyn_ref::<HtmlInputElement>() else {
        return;
    };
    if !input.value().trim().is_empty() {
        let _ = input.style().set_property("border-color", DEFAULT_BORDER_COLOR);
    }
}

/// Name-keyed extraction of the current form values plus the checked
/// services in document order.
pub(super) fn read_form_values(
    document: &Document,
    form: &HtmlFormElement,
) -> Result<FormValues, String> {
    let data = FormData::new_with_form(form).map_err(|_| "failed to read form data".to_string())?;
    let text_value = |field: FieldId| data.get(field.as_str()).as_string().unwrap_or_default();

    Ok(FormValues {
        name: text_value(FieldId::Name),
        furigana: text_value(FieldId::Furigana),
        email: text_value(FieldId::Email),
        phone: text_value(FieldId::Phone),
        company: text_value(FieldId::Company),
        area: text_value(FieldId::Area),
        time: text_value(FieldId::Time),
        message: text_value(FieldId::Message),
        services: checked_services(document)?,
    })
}

fn checked_services(document: &Document) -> Result<Vec<String>, String> {
    let nodes = document
        .query_selector_all(CHECKED_SERVICES_SELECTOR)
        .map_err(|_| "failed to query checked services".to_string())?;
    let mut services = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Some(checkbox) = node.dyn_ref::<HtmlInputElement>() {
            services.push(checkbox.value());
        }
    }
    Ok(services)
}

/// Replays a validation pass onto the DOM: border styling for the
/// required fields and one message per aggregate issue. Later
/// messages replace earlier ones in the status region.
pub(super) fn apply_validation_feedback(document: &Document, report: &ValidationReport) {
    for field in REQUIRED_FIELDS {
        set_field_border(document, field, report.field_is_invalid(field));
    }
    for issue in &report.issues {
        match issue {
            ValidationIssue::NoServiceSelected => {
                show_message(MESSAGE_SELECT_SERVICES, Severity::Error);
            }
            ValidationIssue::MalformedEmail => {
                show_message(MESSAGE_EMAIL_MALFORMED, Severity::Error);
            }
            ValidationIssue::BlankRequiredField(_) => {}
        }
    }
}

fn set_field_border(document: &Document, field: FieldId, invalid: bool) {
    let Some(element) = document.get_element_by_id(field.as_str()) else {
        return;
    };
    let Ok(element) = element.dyn_into::<HtmlElement>() else {
        return;
    };
    let color = if invalid {
        INVALID_BORDER_COLOR
    } else {
        DEFAULT_BORDER_COLOR
    };
    let _ = element.style().set_property("border-color", color);
}

pub(super) fn prefill_name_if_blank(document: &Document, display_name: &str) {
    let Some(element) = document.get_element_by_id(FieldId::Name.as_str()) else {
        return;
    };
    let Some(input) = element.dyn_ref::<HtmlInputElement>() else {
        return;
    };
    if input.value().trim().is_empty() {
        input.set_value(display_name);
    }
}

pub(super) fn set_submit_busy(document: &Document) -> Result<(), String> {
    let button = submit_button(document)?;
    button.set_disabled(true);
    if let Some(label) = submit_label(document) {
        label.set_inner_html(SUBMIT_LABEL_BUSY_HTML);
    }
    Ok(())
}

pub(super) fn restore_submit_control(document: &Document) {
    if let Ok(button) = submit_button(document) {
        button.set_disabled(false);
    }
    if let Some(label) = submit_label(document) {
        label.set_inner_text(SUBMIT_LABEL_IDLE);
    }
}

fn submit_button(document: &Document) -> Result<HtmlButtonElement, String> {
    document
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .map_err(|_| "failed to query submit button".to_string())?
        .ok_or_else(|| "missing submit button".to_string())?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| "submit control is not HtmlButtonElement".to_string())
}

fn submit_label(document: &Document) -> Option<HtmlElement> {
    let element: Element = document.query_selector(SUBMIT_LABEL_SELECTOR).ok()??;
    element.dyn_into::<HtmlElement>().ok()
}
