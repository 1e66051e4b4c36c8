/// Base URL of the Car Sell API.
/// Resolved at compile time:
/// - development: http://localhost:3001 (default)
/// - production: set BACKEND_URL in .env (see build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// localStorage key holding the signed-in user's session object.
pub const STORAGE_KEY_USER_DATA: &str = "car-sell:userData";

/// WhatsApp click-to-chat endpoint used by the contact button.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Country code prepended to every advertiser phone number.
pub const PHONE_COUNTRY_CODE: &str = "55";
