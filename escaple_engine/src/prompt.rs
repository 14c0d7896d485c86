//! Modal prompt -- asks the player for a line of text.
//!
//! A prompt is opened, waits for exactly one [`Dismissal`], and resolves to
//! either the trimmed text or a cancellation. Only one prompt can be open at
//! a time; while one is open the world refuses hotspot clicks and room changes.

use log::{info, warn};
use thiserror::Error;

use crate::frontend::Frontend;

/// Every way the player can close a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal {
    /// Confirm button or Enter, with the raw text typed.
    Confirm(String),
    /// The cancel control.
    Cancel,
    /// Escape key (Ctrl-C in the terminal).
    Escape,
    /// A click outside the dialog box.
    OutsideClick,
}

/// What a resolved prompt yields to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Confirmed input, already trimmed. May be empty.
    Submitted(String),
    Cancelled,
}

impl PromptOutcome {
    /// The submitted text, or `None` for a cancellation or an empty submission.
    pub fn entry(&self) -> Option<&str> {
        match self {
            PromptOutcome::Submitted(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("a prompt is already open (\"{0}\")")]
    AlreadyOpen(String),
    #[error("no prompt is open")]
    NotOpen,
}

/// Tracks the single open prompt, if any.
#[derive(Debug, Clone, Default)]
pub struct ModalPrompt {
    open: Option<String>,
}

impl ModalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Text of the open prompt.
    pub fn open_text(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Mark a prompt as open.
    ///
    /// # Errors
    /// - `AlreadyOpen` if another prompt hasn't been resolved yet
    pub fn open(&mut self, text: &str) -> Result<(), ModalError> {
        if let Some(current) = &self.open {
            return Err(ModalError::AlreadyOpen(current.clone()));
        }
        info!("prompt opened: \"{text}\"");
        self.open = Some(text.to_string());
        Ok(())
    }

    /// Close the open prompt. All dismissal kinds end up here.
    ///
    /// # Errors
    /// - `NotOpen` if there is nothing to resolve
    pub fn resolve(&mut self, dismissal: Dismissal) -> Result<PromptOutcome, ModalError> {
        let text = self.open.take().ok_or(ModalError::NotOpen)?;
        let outcome = match dismissal {
            Dismissal::Confirm(raw) => PromptOutcome::Submitted(raw.trim().to_string()),
            Dismissal::Cancel | Dismissal::Escape | Dismissal::OutsideClick => PromptOutcome::Cancelled,
        };
        info!("prompt \"{text}\" resolved: {outcome:?}");
        Ok(outcome)
    }

    /// Open a prompt, wait on the front-end for the player, and resolve it.
    ///
    /// A front-end I/O failure resolves the prompt as cancelled.
    ///
    /// # Errors
    /// - `AlreadyOpen` if called while another prompt is open
    pub fn ask(&mut self, frontend: &mut dyn Frontend, text: &str) -> Result<PromptOutcome, ModalError> {
        self.open(text)?;
        let dismissal = frontend.prompt(text).unwrap_or_else(|err| {
            warn!("input failed while prompt \"{text}\" was open: {err}");
            Dismissal::Cancel
        });
        self.resolve(dismissal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedFrontend;

    #[test]
    fn confirm_yields_trimmed_text() {
        let mut prompt = ModalPrompt::new();
        let mut frontend = ScriptedFrontend::new([Dismissal::Confirm("  213 \n".into())]);
        let outcome = prompt.ask(&mut frontend, "Enter code:").unwrap();
        assert_eq!(outcome, PromptOutcome::Submitted("213".into()));
        assert_eq!(frontend.prompts_seen, vec!["Enter code:".to_string()]);
        assert!(!prompt.is_open());
    }

    #[test]
    fn every_dismissal_other_than_confirm_cancels() {
        for dismissal in [Dismissal::Cancel, Dismissal::Escape, Dismissal::OutsideClick] {
            let mut prompt = ModalPrompt::new();
            prompt.open("Enter code:").unwrap();
            assert_eq!(prompt.resolve(dismissal).unwrap(), PromptOutcome::Cancelled);
            assert!(!prompt.is_open());
        }
    }

    #[test]
    fn empty_confirm_is_distinct_from_cancel_but_has_no_entry() {
        let submitted = PromptOutcome::Submitted(String::new());
        assert_ne!(submitted, PromptOutcome::Cancelled);
        assert_eq!(submitted.entry(), None);
        assert_eq!(PromptOutcome::Cancelled.entry(), None);
        assert_eq!(PromptOutcome::Submitted("apple".into()).entry(), Some("apple"));
    }

    #[test]
    fn second_open_is_refused() {
        let mut prompt = ModalPrompt::new();
        prompt.open("first").unwrap();
        assert_eq!(prompt.open("second"), Err(ModalError::AlreadyOpen("first".into())));
        assert_eq!(prompt.open_text(), Some("first"));
    }

    #[test]
    fn resolving_twice_fails() {
        let mut prompt = ModalPrompt::new();
        prompt.open("once").unwrap();
        prompt.resolve(Dismissal::Cancel).unwrap();
        assert_eq!(prompt.resolve(Dismissal::Cancel), Err(ModalError::NotOpen));
    }

    #[test]
    fn input_failure_resolves_as_cancelled() {
        let mut prompt = ModalPrompt::new();
        let mut frontend = ScriptedFrontend::default();
        assert_eq!(prompt.ask(&mut frontend, "Enter code:").unwrap(), PromptOutcome::Cancelled);
        assert!(!prompt.is_open());
    }
}
