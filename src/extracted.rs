//! Registration field extraction from rendered message bodies

use regex::Regex;

/// Opening tag of the styled cell the registration form renders values into
pub const STYLED_CELL_OPEN: &str =
    r#"<td style="color:#555555;padding-top: 3px;padding-bottom: 20px;">"#;

/// Occurrence of the styled cell holding the name
pub const NAME_CELL_INDEX: usize = 0;

/// Occurrence of the styled cell holding the phone number
pub const PHONE_CELL_INDEX: usize = 2;

// Regex patterns
static STYLED_CELL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(&format!("{}(.*?)</td>", regex::escape(STYLED_CELL_OPEN)))
        .expect("styled cell pattern is valid")
});

static MAILTO_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"<a href="mailto:(.*?)">"#).expect("mailto pattern is valid")
});

/// Raw values pulled out of a message body.
///
/// A field that was not found is an empty string; values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl RegistrationFields {
    /// Extract name, email and phone from a rendered body
    #[must_use]
    pub fn extract(body: &str) -> Self {
        Self {
            name: styled_cell(body, NAME_CELL_INDEX).unwrap_or_default(),
            email: first_capture(&MAILTO_REGEX, body).unwrap_or_default(),
            phone_number: styled_cell(body, PHONE_CELL_INDEX).unwrap_or_default(),
        }
    }

    /// Names of required fields that came out empty
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("Name");
        }
        if self.phone_number.is_empty() {
            missing.push("PhoneNumber");
        }
        if self.email.is_empty() {
            missing.push("Email");
        }
        missing
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone_number.is_empty()
    }
}

/// Content of the `index`-th styled cell, counting from zero
#[must_use]
pub fn styled_cell(body: &str, index: usize) -> Option<String> {
    STYLED_CELL_REGEX
        .captures_iter(body)
        .nth(index)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Number of styled cells present in a body
#[must_use]
pub fn styled_cell_count(body: &str) -> usize {
    STYLED_CELL_REGEX.find_iter(body).count()
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
