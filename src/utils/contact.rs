use js_sys::encode_uri_component;

use super::constants::{PHONE_COUNTRY_CODE, WHATSAPP_SEND_URL};
use super::masks::only_numbers;

/// Phone part of the click-to-chat link: country code plus the advertiser's
/// number reduced to digits.
pub fn contact_phone(phone: &str) -> String {
    format!("{}{}", PHONE_COUNTRY_CODE, only_numbers(phone))
}

/// WhatsApp link for the contact button, greeting the seller with the
/// vehicle model the buyer is interested in.
pub fn whatsapp_link(phone: &str, model: &str) -> String {
    let message = format!(
        "Olá, vi seu anúncio no Car Sell. Me interessei pelo {}, podemos conversar melhor?",
        model
    );
    let encoded: String = encode_uri_component(&message).into();

    format!(
        "{}?phone={}&text={}",
        WHATSAPP_SEND_URL,
        contact_phone(phone),
        encoded
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_phone_is_digits_after_country_code() {
        let phone = contact_phone("(11) 98765-4321");
        assert!(phone.starts_with(PHONE_COUNTRY_CODE));
        assert!(phone.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(phone, "5511987654321");
    }

    #[test]
    fn contact_phone_keeps_plain_numbers() {
        assert_eq!(contact_phone("11987654321"), "5511987654321");
    }
}
