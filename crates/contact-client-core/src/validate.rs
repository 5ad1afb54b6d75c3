use crate::form::{FieldId, FormValues, REQUIRED_FIELDS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("required field {} is blank", .0.as_str())]
    BlankRequiredField(FieldId),
    #[error("no service option is selected")]
    NoServiceSelected,
    #[error("email address shape is invalid")]
    MalformedEmail,
}

/// Outcome of one full validation pass. Issues are recorded in check
/// order so callers can replay the per-field feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_submittable(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether the given field should be rendered as invalid. Only the
    /// required fields ever carry invalid styling; the email field is
    /// also invalid when its shape check failed.
    pub fn field_is_invalid(&self, id: FieldId) -> bool {
        self.issues.iter().any(|issue| match issue {
            ValidationIssue::BlankRequiredField(field) => *field == id,
            ValidationIssue::MalformedEmail => id == FieldId::Email,
            ValidationIssue::NoServiceSelected => false,
        })
    }
}

/// Checks every rule rather than stopping at the first failure, so a
/// single pass annotates the whole form.
pub fn validate(values: &FormValues) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in REQUIRED_FIELDS {
        if values.field(field).trim().is_empty() {
            report.issues.push(ValidationIssue::BlankRequiredField(field));
        }
    }

    if values.services.is_empty() {
        report.issues.push(ValidationIssue::NoServiceSelected);
    }

    let email = values.email.as_str();
    if !email.trim().is_empty() && !email_shape_is_valid(email) {
        report.issues.push(ValidationIssue::MalformedEmail);
    }

    report
}

/// The `local@domain.tld` shape: no whitespace, exactly one `@`, a
/// non-empty local part, and a domain with an interior dot.
pub fn email_shape_is_valid(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_values() -> FormValues {
        FormValues {
            name: "山田 太郎".to_string(),
            furigana: "やまだ たろう".to_string(),
            email: "taro@example.co.jp".to_string(),
            phone: "090-1234-5678".to_string(),
            company: String::new(),
            area: "東京都".to_string(),
            time: "午前中".to_string(),
            message: String::new(),
            services: vec!["宅配サービス".to_string()],
        }
    }

    #[test]
    fn fully_filled_form_is_submittable() {
        let report = validate(&filled_values());
        assert!(report.is_submittable());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn each_blank_required_field_is_reported() {
        for field in REQUIRED_FIELDS {
            let mut values = filled_values();
            match field {
                FieldId::Name => values.name = "   ".to_string(),
                FieldId::Furigana => values.furigana = String::new(),
                FieldId::Email => values.email = String::new(),
                FieldId::Phone => values.phone = "\t".to_string(),
                FieldId::Area => values.area = String::new(),
                _ => unreachable!("field is not required"),
            }
            let report = validate(&values);
            assert!(!report.is_submittable(), "{field:?} should block submit");
            assert!(report.field_is_invalid(field));
            assert!(
                report
                    .issues
                    .contains(&ValidationIssue::BlankRequiredField(field))
            );
        }
    }

    #[test]
    fn optional_fields_may_stay_blank() {
        let mut values = filled_values();
        values.company = String::new();
        values.time = String::new();
        values.message = String::new();
        assert!(validate(&values).is_submittable());
    }

    #[test]
    fn validation_reports_every_failure_in_one_pass() {
        let values = FormValues::default();
        let report = validate(&values);
        assert_eq!(report.issues.len(), REQUIRED_FIELDS.len() + 1);
        assert!(report.issues.contains(&ValidationIssue::NoServiceSelected));
    }

    #[test]
    fn zero_checked_services_fail_even_when_fields_are_valid() {
        let mut values = filled_values();
        values.services.clear();
        let report = validate(&values);
        assert_eq!(report.issues, vec![ValidationIssue::NoServiceSelected]);
    }

    #[test]
    fn malformed_email_marks_the_email_field() {
        let mut values = filled_values();
        values.email = "taro@example".to_string();
        let report = validate(&values);
        assert!(!report.is_submittable());
        assert!(report.field_is_invalid(FieldId::Email));
        assert!(report.issues.contains(&ValidationIssue::MalformedEmail));
    }

    #[test]
    fn blank_email_is_reported_as_blank_not_malformed() {
        let mut values = filled_values();
        values.email = " ".to_string();
        let report = validate(&values);
        assert!(
            report
                .issues
                .contains(&ValidationIssue::BlankRequiredField(FieldId::Email))
        );
        assert!(!report.issues.contains(&ValidationIssue::MalformedEmail));
    }

    #[test]
    fn email_shape_accepts_standard_addresses() {
        for email in [
            "taro@example.com",
            "a@b.co",
            "first.last@mail.example.co.jp",
            "user+tag@example.io",
        ] {
            assert!(email_shape_is_valid(email), "{email} should pass");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for email in [
            "taro",
            "taro@example",
            "@example.com",
            "taro@",
            "taro@.com",
            "taro@example.",
            "ta ro@example.com",
            "taro@exam ple.com",
            "taro@@example.com",
            "taro@example@co.jp",
        ] {
            assert!(!email_shape_is_valid(email), "{email} should fail");
        }
    }

    #[test]
    fn services_issue_never_styles_a_field() {
        let mut values = filled_values();
        values.services.clear();
        let report = validate(&values);
        for field in FieldId::ALL {
            assert!(!report.field_is_invalid(field));
        }
    }
}
