use crate::{Prompter, Validator, WizardResult};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

/// [`Prompter`] backed by dialoguer on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str, default: Option<bool>) -> WizardResult<bool> {
        let mut confirm = Confirm::with_theme(&self.theme).with_prompt(question);
        if let Some(default) = default {
            confirm = confirm.default(default);
        }

        Ok(confirm.interact()?)
    }

    fn select(&mut self, question: &str, choices: &[&str]) -> WizardResult<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(choices)
            .default(0)
            .interact()?;

        Ok(index)
    }

    fn text(&mut self, question: &str, validate: Validator<'_>) -> WizardResult<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text()?;

        Ok(answer)
    }

    fn secret(&mut self, question: &str) -> WizardResult<String> {
        let answer = Password::with_theme(&self.theme)
            .with_prompt(question)
            .interact()?;

        Ok(answer)
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}
