//! Test helpers: a front-end that answers prompts from a script.

use std::collections::VecDeque;
use std::io;

use crate::frontend::Frontend;
use crate::prompt::Dismissal;

/// Answers prompts from a queue and records what the core asked it to do.
///
/// Once the queue runs dry, further prompts fail with `UnexpectedEof`, which the
/// prompt treats as a cancellation.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    answers: VecDeque<Dismissal>,
    pub prompts_seen: Vec<String>,
    pub renders: Vec<Vec<String>>,
}

impl ScriptedFrontend {
    pub fn new(answers: impl IntoIterator<Item = Dismissal>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts_seen: Vec::new(),
            renders: Vec::new(),
        }
    }

    /// Queue a confirmed entry.
    pub fn type_line(&mut self, text: &str) {
        self.answers.push_back(Dismissal::Confirm(text.to_string()));
    }

    /// Queue a non-confirm dismissal.
    pub fn dismiss(&mut self, dismissal: Dismissal) {
        self.answers.push_back(dismissal);
    }

    /// Inventory as last drawn, if it was ever drawn.
    pub fn last_render(&self) -> Option<&[String]> {
        self.renders.last().map(Vec::as_slice)
    }
}

impl Frontend for ScriptedFrontend {
    fn render_inventory(&mut self, items: &[String]) {
        self.renders.push(items.to_vec());
    }

    fn prompt(&mut self, text: &str) -> io::Result<Dismissal> {
        self.prompts_seen.push(text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script has no more answers"))
    }
}
