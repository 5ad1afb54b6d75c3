use serde::{Deserialize, Serialize};

/// Fields on the delivery-request form, keyed by their DOM `name`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Furigana,
    Email,
    Phone,
    Company,
    Area,
    Time,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::Name,
        FieldId::Furigana,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Area,
        FieldId::Time,
        FieldId::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Furigana => "furigana",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Company => "company",
            FieldId::Area => "area",
            FieldId::Time => "time",
            FieldId::Message => "message",
        }
    }
}

/// Fields that must be non-blank for the form to be submittable.
pub const REQUIRED_FIELDS: [FieldId; 5] = [
    FieldId::Name,
    FieldId::Furigana,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Area,
];

/// One snapshot of the form surface, taken at submit time. `services`
/// holds the checked option values in the order the caller collected
/// them (the web shell walks the checkbox group in document order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub furigana: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub area: String,
    pub time: String,
    pub message: String,
    pub services: Vec<String>,
}

impl FormValues {
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Furigana => &self.furigana,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Company => &self.company,
            FieldId::Area => &self.area,
            FieldId::Time => &self.time,
            FieldId::Message => &self.message,
        }
    }
}

/// Joins the selected services into the wire form, preserving the
/// order the caller collected them in.
pub fn joined_services(services: &[String]) -> String {
    services.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_round_trip_their_dom_names() {
        for id in FieldId::ALL {
            assert!(!id.as_str().is_empty());
        }
        assert_eq!(FieldId::Furigana.as_str(), "furigana");
        assert_eq!(FieldId::Message.as_str(), "message");
    }

    #[test]
    fn joined_services_uses_comma_and_space() {
        let services = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        assert_eq!(joined_services(&services), "A, B, C");
    }

    #[test]
    fn joined_services_preserves_collection_order() {
        let reversed = vec!["B".to_string(), "A".to_string()];
        assert_eq!(joined_services(&reversed), "B, A");
    }

    #[test]
    fn joined_services_is_empty_for_no_selection() {
        assert_eq!(joined_services(&[]), "");
    }
}
