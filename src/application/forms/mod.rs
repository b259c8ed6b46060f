//! Request payloads checked with `validator` before any command runs.

pub mod auth;
pub mod contact;
pub mod material;
pub mod talent;

pub use auth::LoginForm;
pub use contact::ContactForm;
pub use material::{MaterialApplication, MaterialForm, MaterialStep, MaterialWizard};
pub use talent::{BlockInput, TalentForm, ValidTalent};

/// Trims a form value and maps blank input to `None`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::blank_to_none;

    #[test]
    fn blank_values_become_none() {
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some("   ".into())), None);
        assert_eq!(blank_to_none(Some(" ok ".into())).as_deref(), Some("ok"));
    }
}
