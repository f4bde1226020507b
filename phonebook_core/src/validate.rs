//! Value patterns for contact entries.
//!
//! Both patterns must match the whole value, not a substring of it.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more `+` followed by ASCII digits. `++123` is accepted.
#[expect(clippy::expect_used, reason = "Pattern is a literal checked by tests")]
#[expect(clippy::non_std_lazy_statics, reason = "once_cell is the workspace lazy-init crate")]
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\++[0-9]+$").expect("phone pattern compiles"));

/// `local@domain.tld` with ASCII alphanumeric parts and a 2-4 character tld.
#[expect(clippy::expect_used, reason = "Pattern is a literal checked by tests")]
#[expect(clippy::non_std_lazy_statics, reason = "once_cell is the workspace lazy-init crate")]
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+@[A-Za-z0-9]+\.[A-Za-z0-9]{2,4}$").expect("email pattern compiles")
});

#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
