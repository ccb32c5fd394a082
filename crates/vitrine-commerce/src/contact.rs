//! Contact channels for a shop.

use crate::ids::ContactId;
use serde::{Deserialize, Serialize};

/// Kind of contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Email,
    Whatsapp,
    Instagram,
    Phone,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Whatsapp => "whatsapp",
            ContactKind::Instagram => "instagram",
            ContactKind::Phone => "phone",
        }
    }

    /// Display label in the embedded locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            ContactKind::Email => "E-mail",
            ContactKind::Whatsapp => "WhatsApp",
            ContactKind::Instagram => "Instagram",
            ContactKind::Phone => "Telefone",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "email" => Some(ContactKind::Email),
            "whatsapp" => Some(ContactKind::Whatsapp),
            "instagram" => Some(ContactKind::Instagram),
            "phone" => Some(ContactKind::Phone),
            _ => None,
        }
    }

    /// All kinds, in picker order.
    pub fn all() -> [ContactKind; 4] {
        [
            ContactKind::Email,
            ContactKind::Whatsapp,
            ContactKind::Instagram,
            ContactKind::Phone,
        ]
    }
}

/// One contact channel entry. The value is free text; no format is
/// enforced (phone normalization happens at order-composition time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique contact identifier.
    pub id: ContactId,
    /// Channel kind.
    pub kind: ContactKind,
    /// Raw channel value (address, handle, or phone).
    pub value: String,
}

impl Contact {
    /// Create a new contact with a generated id.
    pub fn new(kind: ContactKind, value: impl Into<String>) -> Self {
        Self {
            id: ContactId::generate(),
            kind,
            value: value.into(),
        }
    }

    /// Create a contact with a fixed id (seed data).
    pub fn with_id(id: impl Into<ContactId>, kind: ContactKind, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            value: value.into(),
        }
    }
}

/// First contact of the given kind, in insertion order.
pub fn first_of_kind(contacts: &[Contact], kind: ContactKind) -> Option<&Contact> {
    contacts.iter().find(|c| c.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in ContactKind::all() {
            assert_eq!(ContactKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ContactKind::parse("telegram"), None);
    }

    #[test]
    fn test_first_of_kind_respects_order() {
        let contacts = vec![
            Contact::new(ContactKind::Whatsapp, "first"),
            Contact::new(ContactKind::Email, "mail"),
            Contact::new(ContactKind::Whatsapp, "second"),
        ];
        let found = first_of_kind(&contacts, ContactKind::Whatsapp).unwrap();
        assert_eq!(found.value, "first");
        assert!(first_of_kind(&contacts, ContactKind::Phone).is_none());
    }
}
