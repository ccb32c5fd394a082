//! WhatsApp order composition.
//!
//! Pure functions mapping a product (or the cart) plus contact info
//! into a pre-filled `https://wa.me/` deep link. Opening the link is
//! the caller's responsibility.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::contact::{first_of_kind, Contact, ContactKind};
use crate::error::CommerceError;

/// Deep-link base for the external messaging service.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Country code prefixed onto bare national numbers.
const COUNTRY_CODE: &str = "55";

/// Keep only ASCII digits.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a raw phone string into a deep-link digit path.
///
/// Strips non-digits; a bare national number (exactly 10 or 11 digits)
/// gets the `55` country code prefixed, anything else is used as-is so
/// numbers that already carry a country code are never double-prefixed.
pub fn normalize_phone(raw: &str) -> String {
    let digits = strip_non_digits(raw);
    match digits.len() {
        10 | 11 => format!("{COUNTRY_CODE}{digits}"),
        _ => digits,
    }
}

fn deep_link(digits: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE}{digits}?text={}",
        urlencoding::encode(message)
    )
}

/// The single-product enquiry message.
///
/// The price is the locale-agnostic fixed-point form, unlike the
/// localized currency used everywhere else.
pub fn product_order_message(product: &Product) -> String {
    format!(
        "Olá! Gostaria de encomendar o produto: *{}* (Preço: R$ {}). \
         Poderia me passar mais informações?",
        product.name,
        product.price.display_fixed()
    )
}

/// Compose the deep link for a single-product order.
///
/// Uses the first WhatsApp contact; a missing contact, or one with no
/// digits in its value, aborts with [`CommerceError::MissingWhatsappContact`].
pub fn product_order_link(
    product: &Product,
    contacts: &[Contact],
) -> Result<String, CommerceError> {
    let contact = first_of_kind(contacts, ContactKind::Whatsapp)
        .ok_or(CommerceError::MissingWhatsappContact)?;
    let digits = normalize_phone(&contact.value);
    if digits.is_empty() {
        return Err(CommerceError::MissingWhatsappContact);
    }
    Ok(deep_link(&digits, &product_order_message(product)))
}

/// The multi-line cart receipt message.
pub fn checkout_message(cart: &Cart, store_name: &str) -> String {
    let mut message = format!("*Novo Pedido - {store_name}*\n\n");
    message.push_str("-------------------------------\n");
    for item in cart.items() {
        message.push_str(&format!(
            "{}x {}\n{}\n\n",
            item.quantity,
            item.name,
            item.subtotal().display()
        ));
    }
    message.push_str("-------------------------------\n");
    message.push_str(&format!("*Total: {}*\n\n", cart.total().display()));
    message.push_str("Gostaria de confirmar a disponibilidade e entrega.");
    message
}

/// Compose the deep link for a cart checkout.
///
/// The cart must be non-empty. When the phone string has no digits the
/// link omits the recipient (`https://wa.me/?text=...`) and the
/// external app prompts for a contact.
pub fn checkout_link(
    cart: &Cart,
    store_name: &str,
    raw_phone: &str,
) -> Result<String, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    let digits = normalize_phone(raw_phone);
    Ok(deep_link(&digits, &checkout_message(cart, store_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn product(name: &str, price: f64) -> Product {
        Product::new(name, "", Money::from_reais(price), "Kits")
    }

    fn whatsapp(value: &str) -> Vec<Contact> {
        vec![
            Contact::new(ContactKind::Email, "contato@loja.com"),
            Contact::new(ContactKind::Whatsapp, value),
        ]
    }

    #[test]
    fn test_bare_national_number_gets_country_code() {
        assert_eq!(normalize_phone("11999998888"), "5511999998888");
        assert_eq!(normalize_phone("1199999888"), "551199999888");
    }

    #[test]
    fn test_number_with_country_code_is_unchanged() {
        // 13 digits after stripping, already carries the country code.
        assert_eq!(normalize_phone("+55 11 99999-8888"), "5511999998888");
        assert_eq!(normalize_phone("551199999888"), "551199999888");
    }

    #[test]
    fn test_formatting_characters_are_stripped() {
        assert_eq!(normalize_phone("(11) 99999-9999"), "5511999999999");
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("sem número"), "");
    }

    #[test]
    fn test_product_order_link() {
        let url = product_order_link(&product("Caderno", 12.5), &whatsapp("11999998888")).unwrap();
        assert!(url.starts_with("https://wa.me/5511999998888?text="));
        // Fixed-point price, bold product name, URL-encoded.
        assert!(url.contains(urlencoding::encode("*Caderno*").as_ref()));
        assert!(url.contains(urlencoding::encode("R$ 12.50").as_ref()));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_missing_whatsapp_contact_aborts() {
        let err = product_order_link(&product("Caderno", 12.5), &whatsapp("")).unwrap_err();
        assert_eq!(err, CommerceError::MissingWhatsappContact);

        let no_whatsapp = vec![Contact::new(ContactKind::Email, "a@b.c")];
        let err = product_order_link(&product("Caderno", 12.5), &no_whatsapp).unwrap_err();
        assert_eq!(err, CommerceError::MissingWhatsappContact);
    }

    #[test]
    fn test_checkout_message_layout() {
        let mut cart = Cart::new();
        let mut a = product("Planner", 10.0);
        a.id = ProductId::new("1");
        let mut b = product("Kit", 5.0);
        b.id = ProductId::new("2");
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        let message = checkout_message(&cart, "Sonhos de Papel");
        assert!(message.starts_with("*Novo Pedido - Sonhos de Papel*\n\n"));
        assert!(message.contains("2x Planner\nR$ 20,00\n\n"));
        assert!(message.contains("1x Kit\nR$ 5,00\n\n"));
        assert!(message.contains("*Total: R$ 25,00*"));
        assert!(message.ends_with("Gostaria de confirmar a disponibilidade e entrega."));
    }

    #[test]
    fn test_checkout_link_normalizes_phone() {
        let mut cart = Cart::new();
        cart.add(&product("Planner", 10.0));

        let url = checkout_link(&cart, "Loja A", "(11) 99999-8888").unwrap();
        assert!(url.starts_with("https://wa.me/5511999998888?text="));
    }

    #[test]
    fn test_checkout_without_phone_omits_recipient() {
        let mut cart = Cart::new();
        cart.add(&product("Planner", 10.0));

        let url = checkout_link(&cart, "Loja A", "").unwrap();
        assert!(url.starts_with("https://wa.me/?text="));
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let err = checkout_link(&Cart::new(), "Loja A", "11999998888").unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }
}
