//! First-run setup wizard form.

use crate::info::ShopInfo;
use crate::theme::ThemeColor;
use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::contact::ContactKind;

/// A quick-start example shown in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupExample {
    pub store_name: &'static str,
    pub theme: ThemeColor,
}

/// The wizard's example prefills, in display order.
pub const SETUP_EXAMPLES: [SetupExample; 3] = [
    SetupExample {
        store_name: "Padaria da Esquina",
        theme: ThemeColor::Amber,
    },
    SetupExample {
        store_name: "Surf Vibe",
        theme: ThemeColor::Sky,
    },
    SetupExample {
        store_name: "TechZone",
        theme: ThemeColor::Violet,
    },
];

/// The setup wizard's working state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SetupForm {
    /// Store name entered by the owner.
    pub store_name: String,
    /// Chosen accent color, `None` until the owner picks one.
    pub theme: Option<ThemeColor>,
    /// WhatsApp phone, free-form.
    pub phone: String,
}

impl SetupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy an example's name and theme into the form. The phone is
    /// left as typed.
    pub fn apply_example(&mut self, example: &SetupExample) {
        self.store_name = example.store_name.to_string();
        self.theme = Some(example.theme);
    }

    /// The wizard can finish once a non-blank name and a theme exist.
    /// Phone is optional; ordering degrades gracefully without it.
    pub fn is_submittable(&self) -> bool {
        !self.store_name.trim().is_empty() && self.theme.is_some()
    }

    /// Build the initial shop and catalog from the form.
    ///
    /// The shop starts from the seed defaults with the form's name and
    /// theme applied; a non-blank phone replaces the seed WhatsApp
    /// contact value.
    pub fn apply(&self) -> (ShopInfo, Catalog) {
        let mut info = ShopInfo::seeded();
        info.name = self.store_name.trim().to_string();
        info.theme_color = self.theme.unwrap_or_default();

        let phone = self.phone.trim();
        if !phone.is_empty() {
            if let Some(contact) = info
                .contacts
                .iter_mut()
                .find(|c| c.kind == ContactKind::Whatsapp)
            {
                contact.value = phone.to_string();
            }
        }

        (info, Catalog::seeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submittable_needs_name_and_theme() {
        let mut form = SetupForm::new();
        assert!(!form.is_submittable());

        form.store_name = "Sonhos de Papel".to_string();
        assert!(!form.is_submittable());

        form.theme = Some(ThemeColor::Pink);
        assert!(form.is_submittable());

        form.store_name = "   ".to_string();
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_example_prefill() {
        let mut form = SetupForm::new();
        form.phone = "11 99999-0000".to_string();
        form.apply_example(&SETUP_EXAMPLES[1]);
        assert_eq!(form.store_name, "Surf Vibe");
        assert_eq!(form.theme, Some(ThemeColor::Sky));
        assert_eq!(form.phone, "11 99999-0000");
    }

    #[test]
    fn test_apply_builds_seeded_store() {
        let form = SetupForm {
            store_name: "  Padaria da Esquina  ".to_string(),
            theme: Some(ThemeColor::Amber),
            phone: "11988887777".to_string(),
        };
        let (info, catalog) = form.apply();
        assert_eq!(info.name, "Padaria da Esquina");
        assert_eq!(info.theme_color, ThemeColor::Amber);
        assert_eq!(info.whatsapp_value(), Some("11988887777"));
        assert_eq!(catalog.products.len(), 4);
    }

    #[test]
    fn test_apply_keeps_seed_phone_when_blank() {
        let form = SetupForm {
            store_name: "TechZone".to_string(),
            theme: Some(ThemeColor::Violet),
            phone: "  ".to_string(),
        };
        let (info, _) = form.apply();
        assert_eq!(info.whatsapp_value(), Some("(11) 99999-9999"));
    }
}
