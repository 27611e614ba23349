use rj_cli::{Prompter, Validator, WizardResult};

use std::collections::VecDeque;

/// One canned reply, consumed in order
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Text(String),
    Secret(String),
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Answer::Text(value.to_string())
    }

    pub fn secret(value: &str) -> Self {
        Answer::Secret(value.to_string())
    }
}

/// Prompter that replays a fixed script and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Answer>,
    /// Every question asked, in order
    pub asked: Vec<String>,
    /// Every informational message, in order
    pub said: Vec<String>,
    /// Text answers a validator rejected, with the rejection message
    pub rejected: Vec<(String, String)>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn was_asked(&self, question: &str) -> bool {
        self.asked.iter().any(|asked| asked == question)
    }

    pub fn said_containing(&self, fragment: &str) -> bool {
        self.said.iter().any(|message| message.contains(fragment))
    }

    fn next(&mut self, question: &str) -> Answer {
        self.asked.push(question.to_string());
        match self.script.pop_front() {
            Some(answer) => answer,
            None => panic!("script exhausted at question: {question}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str, _default: Option<bool>) -> WizardResult<bool> {
        match self.next(question) {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected Confirm for '{question}', script has {other:?}"),
        }
    }

    /// Indices are returned as scripted, even out of range
    fn select(&mut self, question: &str, _choices: &[&str]) -> WizardResult<usize> {
        match self.next(question) {
            Answer::Select(index) => Ok(index),
            other => panic!("expected Select for '{question}', script has {other:?}"),
        }
    }

    fn text(&mut self, question: &str, validate: Validator<'_>) -> WizardResult<String> {
        loop {
            match self.next(question) {
                Answer::Text(value) => match validate(&value) {
                    Ok(()) => return Ok(value),
                    Err(reason) => self.rejected.push((value, reason)),
                },
                other => panic!("expected Text for '{question}', script has {other:?}"),
            }
        }
    }

    fn secret(&mut self, question: &str) -> WizardResult<String> {
        match self.next(question) {
            Answer::Secret(value) => Ok(value),
            other => panic!("expected Secret for '{question}', script has {other:?}"),
        }
    }

    fn say(&mut self, message: &str) {
        self.said.push(message.to_string());
    }
}
