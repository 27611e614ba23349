use crate::WizardResult;

/// Checks a typed answer; `Err` carries the message shown before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// The interactive "ask" capability the wizard runs against.
///
/// Each call blocks until an answer is available. Implementations re-ask on
/// validator failure instead of returning the rejected text.
pub trait Prompter {
    /// Yes/no question
    fn confirm(&mut self, question: &str, default: Option<bool>) -> WizardResult<bool>;

    /// Pick one of `choices`; returns its index
    fn select(&mut self, question: &str, choices: &[&str]) -> WizardResult<usize>;

    /// Free text, echoed
    fn text(&mut self, question: &str, validate: Validator<'_>) -> WizardResult<String>;

    /// Free text, never echoed
    fn secret(&mut self, question: &str) -> WizardResult<String>;

    /// Informational output between questions
    fn say(&mut self, message: &str);
}
