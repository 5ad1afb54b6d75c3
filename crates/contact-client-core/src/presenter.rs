use std::time::Duration;

/// How long a success message stays visible before auto-hiding.
pub const MESSAGE_AUTO_HIDE_DELAY: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Success messages auto-hide; error messages stay until the next
/// presentation or navigation.
pub fn auto_hide_delay(severity: Severity) -> Option<Duration> {
    match severity {
        Severity::Success => Some(MESSAGE_AUTO_HIDE_DELAY),
        Severity::Error => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_auto_hide_after_five_seconds() {
        assert_eq!(
            auto_hide_delay(Severity::Success),
            Some(Duration::from_millis(5_000))
        );
    }

    #[test]
    fn error_messages_stay_until_replaced() {
        assert_eq!(auto_hide_delay(Severity::Error), None);
    }

    #[test]
    fn severity_maps_to_styling_classes() {
        assert_eq!(Severity::Success.css_class(), "success");
        assert_eq!(Severity::Error.css_class(), "error");
    }
}
