use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for phone number fields
    /// Digits with optional leading +, spaces, parentheses and dashes
    /// - Valid: "+62 812-3456-7890", "(021) 555 0199", "08123456789"
    /// - Invalid: "phone", "123", "+", "812_3456"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").unwrap();
}
