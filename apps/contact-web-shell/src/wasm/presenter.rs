use super::*;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Presents a transient status message: text, severity class, smooth
/// scroll into view. Success messages auto-hide; a later presentation
/// bumps the generation counter so a stale hide never fires.
pub(super) fn show_message(text: &str, severity: Severity) {
    let Ok(document) = document() else {
        return;
    };
    let Some(region) = document.get_element_by_id(MESSAGE_REGION_ID) else {
        return;
    };
    let Ok(region) = region.dyn_into::<HtmlElement>() else {
        return;
    };

    region.set_text_content(Some(text));
    region.set_class_name(&format!("message {}", severity.css_class()));
    let _ = region.style().set_property("display", "block");

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    region.scroll_into_view_with_scroll_into_view_options(&options);

    let generation = MESSAGE_GENERATION.with(|counter| {
        let next = counter.get().wrapping_add(1);
        counter.set(next);
        next
    });

    if let Some(delay) = auto_hide_delay(severity) {
        spawn_local(async move {
            sleep(delay).await;
            let still_current = MESSAGE_GENERATION.with(|counter| counter.get() == generation);
            if still_current {
                hide_message_region();
            }
        });
    }
}

fn hide_message_region() {
    let Ok(document) = document() else {
        return;
    };
    let Some(region) = document.get_element_by_id(MESSAGE_REGION_ID) else {
        return;
    };
    let Ok(region) = region.dyn_into::<HtmlElement>() else {
        return;
    };
    let _ = region.style().set_property("display", "none");
}
