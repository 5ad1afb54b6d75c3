pub(crate) const LIFF_APP_ID: &str = "2008278807-WN3yGzDy";
pub(crate) const SUBMIT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbzj0Y12PJ4qrNvDk7rJRgXIToq4THDgGwtuSHKUYeXlV2JiOTSvIXcj9ss-thLXHbcdNw/exec";

pub(crate) const FORM_ID: &str = "deliveryForm";
// The status region owns the `message` id; the free-text field is
// name-keyed `message` with a distinct element id.
pub(crate) const MESSAGE_REGION_ID: &str = "message";
pub(crate) const MESSAGE_FIELD_ELEMENT_ID: &str = "message-field";
pub(crate) const SERVICES_GROUP_NAME: &str = "services";
pub(crate) const CHECKED_SERVICES_SELECTOR: &str = "input[name='services']:checked";
pub(crate) const SUBMIT_BUTTON_SELECTOR: &str = ".submit-button";
pub(crate) const SUBMIT_LABEL_SELECTOR: &str = ".button-text";

pub(crate) const SUBMIT_LABEL_IDLE: &str = "送信する";
pub(crate) const SUBMIT_LABEL_BUSY_HTML: &str = "<span class=\"loading\"></span>送信中...";

pub(crate) const INVALID_BORDER_COLOR: &str = "#e74c3c";
pub(crate) const DEFAULT_BORDER_COLOR: &str = "#e1e5e9";

pub(crate) const SERVICE_OPTIONS: [&str; 4] = ["宅配サービス", "定期配送", "買い物代行", "見守りサービス"];
pub(crate) const TIME_SLOT_OPTIONS: [&str; 5] =
    ["指定なし", "午前中", "12時〜15時", "15時〜18時", "18時〜20時"];

pub(crate) const MESSAGE_SUBMIT_SUCCESS: &str =
    "お問い合わせを受け付けました。担当者より追ってご連絡させていただきます。";
pub(crate) const MESSAGE_SUBMIT_FAILURE: &str =
    "送信エラーが発生しました。お手数ですが、再度お試しください。";
pub(crate) const MESSAGE_SELECT_SERVICES: &str = "ご希望のサービスを選択してください";
pub(crate) const MESSAGE_EMAIL_MALFORMED: &str = "メールアドレスの形式が正しくありません";
pub(crate) const MESSAGE_SESSION_INIT_FAILED: &str =
    "LINEミニアプリの初期化でエラーが発生しました";
