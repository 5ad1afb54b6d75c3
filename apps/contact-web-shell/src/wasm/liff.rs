use super::*;

use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = liff, js_name = init)]
    fn liff_init(config: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = liff, js_name = isLoggedIn)]
    fn liff_is_logged_in() -> Result<bool, JsValue>;

    #[wasm_bindgen(catch, js_namespace = liff, js_name = getProfile)]
    fn liff_get_profile() -> Result<js_sys::Promise, JsValue>;
}

/// Runs the LIFF handshake once: init with the fixed application id,
/// then fetch the profile when a login session is already active.
/// `Ok(None)` means the SDK is up but nobody is logged in.
pub(super) async fn establish_session() -> Result<Option<SessionProfile>, String> {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(
        &config,
        &JsValue::from_str("liffId"),
        &JsValue::from_str(LIFF_APP_ID),
    )
    .map_err(|_| "failed to build liff init config".to_string())?;

    let promise =
        liff_init(config.as_ref()).map_err(|error| js_error_message("liff.init is unavailable", &error))?;
    JsFuture::from(promise)
        .await
        .map_err(|error| js_error_message("liff.init failed", &error))?;

    let logged_in =
        liff_is_logged_in().map_err(|error| js_error_message("liff.isLoggedIn failed", &error))?;
    if !logged_in {
        return Ok(None);
    }

    let promise = liff_get_profile()
        .map_err(|error| js_error_message("liff.getProfile is unavailable", &error))?;
    let profile = JsFuture::from(promise)
        .await
        .map_err(|error| js_error_message("liff.getProfile failed", &error))?;
    decode_profile(&profile).map(Some)
}

fn decode_profile(value: &JsValue) -> Result<SessionProfile, String> {
    let user_id = string_property(value, "userId")?
        .ok_or_else(|| "liff profile is missing userId".to_string())?;
    let display_name = string_property(value, "displayName")?.unwrap_or_default();
    let picture_url = string_property(value, "pictureUrl")?.unwrap_or_default();
    Ok(SessionProfile {
        user_id,
        display_name,
        picture_url,
    })
}

fn string_property(value: &JsValue, key: &str) -> Result<Option<String>, String> {
    let property = js_sys::Reflect::get(value, &JsValue::from_str(key))
        .map_err(|_| format!("liff profile property {key} is unreadable"))?;
    Ok(property.as_string())
}

fn js_error_message(context: &str, error: &JsValue) -> String {
    match error.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => context.to_string(),
    }
}
