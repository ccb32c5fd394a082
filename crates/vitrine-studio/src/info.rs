//! Shop metadata aggregate.
//!
//! One process-scoped mutable aggregate per session; no persistence.

use crate::theme::{FontTheme, ThemeColor};
use serde::{Deserialize, Serialize};
use vitrine_commerce::contact::{first_of_kind, Contact, ContactKind};
use vitrine_commerce::ids::ContactId;

/// The shop's editable metadata: identity, about page, contact
/// channels, theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopInfo {
    /// Shop display name.
    pub name: String,
    /// Cover subtitle / slogan.
    pub subtitle: String,
    /// About-page body text.
    pub about_text: String,
    /// About-page image reference.
    pub about_image: Option<String>,
    /// Cover logo image reference.
    pub logo: Option<String>,
    /// Left cover decoration image reference.
    pub left_decoration: Option<String>,
    /// Right cover decoration image reference.
    pub right_decoration: Option<String>,
    /// Contact channels, insertion order preserved.
    pub contacts: Vec<Contact>,
    /// Accent color token.
    pub theme_color: ThemeColor,
    /// Typography pairing.
    pub font_theme: FontTheme,
    /// Whether cover decorations are rendered.
    pub show_decorations: bool,
}

impl Default for ShopInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            subtitle: String::new(),
            about_text: String::new(),
            about_image: None,
            logo: None,
            left_decoration: None,
            right_decoration: None,
            contacts: Vec::new(),
            theme_color: ThemeColor::default(),
            font_theme: FontTheme::default(),
            show_decorations: true,
        }
    }
}

impl ShopInfo {
    /// Create an empty shop with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The seed shop shipped with a fresh session.
    pub fn seeded() -> Self {
        Self {
            name: "Sonhos de Papel".to_string(),
            subtitle: "Papelaria personalizada feita com amor em cada detalhe".to_string(),
            about_text: "Bem-vindo ao nosso mundo de criatividade! Cada peça produzida em \
                         nosso ateliê carrega uma história única. Trabalhamos com materiais \
                         de alta qualidade e um processo artesanal minucioso para transformar \
                         papel em memórias afetivas. Do planejamento do dia a dia aos \
                         presentes mais especiais, estamos aqui para encantar."
                .to_string(),
            about_image: Some("https://picsum.photos/seed/atelierworkspace/800/600".to_string()),
            logo: None,
            left_decoration: None,
            right_decoration: None,
            contacts: vec![
                Contact::with_id("1", ContactKind::Email, "contato@sonhosdepapel.com.br"),
                Contact::with_id("2", ContactKind::Whatsapp, "(11) 99999-9999"),
                Contact::with_id("3", ContactKind::Instagram, "@sonhosdepapel_atelie"),
            ],
            theme_color: ThemeColor::Pink,
            font_theme: FontTheme::Afetivo,
            show_decorations: true,
        }
    }

    /// Append a contact channel and return its id.
    pub fn add_contact(&mut self, kind: ContactKind, value: impl Into<String>) -> ContactId {
        let contact = Contact::new(kind, value);
        let id = contact.id.clone();
        self.contacts.push(contact);
        id
    }

    /// Update a contact's value in place. Silent no-op for unknown ids.
    pub fn update_contact(&mut self, id: &ContactId, value: impl Into<String>) {
        if let Some(contact) = self.contacts.iter_mut().find(|c| &c.id == id) {
            contact.value = value.into();
        }
    }

    /// Remove a contact by id. Idempotent.
    pub fn remove_contact(&mut self, id: &ContactId) {
        self.contacts.retain(|c| &c.id != id);
    }

    /// The first WhatsApp contact's raw value, if any.
    pub fn whatsapp_value(&self) -> Option<&str> {
        first_of_kind(&self.contacts, ContactKind::Whatsapp).map(|c| c.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_shop() {
        let info = ShopInfo::seeded();
        assert_eq!(info.name, "Sonhos de Papel");
        assert_eq!(info.theme_color, ThemeColor::Pink);
        assert_eq!(info.contacts.len(), 3);
        assert_eq!(info.whatsapp_value(), Some("(11) 99999-9999"));
    }

    #[test]
    fn test_contact_mutation() {
        let mut info = ShopInfo::named("Loja A");
        let id = info.add_contact(ContactKind::Whatsapp, "11999998888");
        assert_eq!(info.whatsapp_value(), Some("11999998888"));

        info.update_contact(&id, "11888887777");
        assert_eq!(info.whatsapp_value(), Some("11888887777"));

        info.remove_contact(&id);
        assert_eq!(info.whatsapp_value(), None);
        // Idempotent removal.
        info.remove_contact(&id);
        assert!(info.contacts.is_empty());
    }

    #[test]
    fn test_contact_order_is_preserved() {
        let mut info = ShopInfo::named("Loja A");
        info.add_contact(ContactKind::Email, "a@b.c");
        info.add_contact(ContactKind::Whatsapp, "first");
        info.add_contact(ContactKind::Whatsapp, "second");
        assert_eq!(info.whatsapp_value(), Some("first"));
    }

    #[test]
    fn test_seeded_round_trips_through_json() {
        let info = ShopInfo::seeded();
        let json = serde_json::to_string(&info).unwrap();
        let back: ShopInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, back);
    }
}
