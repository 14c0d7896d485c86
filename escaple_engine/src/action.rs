//! Hotspot actions and their dispatcher.
//!
//! Every hotspot is bound to one [`ActionDescriptor`]. Dispatching runs it
//! against the [`Session`]: most actions finish immediately, while
//! `PromptCode` and `EnterWord` wait on the modal prompt first.
//!
//! Nothing here returns an error. Wrong answers, cancelled prompts and unknown
//! action types are all player-visible messages, and the player always gets
//! control back.
//!
//! Each action logs one line in the form
//! ```text
//! └─ action: ActionName(parameters)
//! ```

use log::{info, warn};

use crate::frontend::Frontend;
use crate::rules::{CombinationRule, family_already_held};
use crate::session::Session;

/// Shown when a prompt is cancelled or confirmed with nothing in it.
pub const NO_ENTRY: &str = "No entry.";

/// Scripted behavior of a hotspot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionDescriptor {
    /// Show a line of text.
    Message(String),
    /// Pick up an item.
    AddItem(String),
    /// Flip a flag and describe its new state.
    ToggleFlag {
        flag: String,
        when_true: String,
        when_false: String,
    },
    /// Ask for a code; any listed code unlocks.
    PromptCode {
        valid_codes: Vec<String>,
        on_success_item: Option<String>,
        prompt: String,
        success: String,
        fail: String,
    },
    /// Ask for the final solution word.
    EnterWord {
        solution: String,
        prompt: String,
        success: String,
        fail: String,
    },
    /// Describe a flag's state without changing it.
    MessageWithFlag {
        flag: String,
        when_true: String,
        when_false: String,
    },
    /// Reveal text only when an optional flag is set and all listed items are held.
    RevealIfFlagAndItems {
        flag: Option<String>,
        required_items: Vec<String>,
        reveal: String,
        fail: String,
    },
    /// An action type from content data that this engine doesn't implement.
    Unimplemented(String),
}

/// Run an action against the session.
pub fn dispatch_action(
    session: &mut Session,
    frontend: &mut dyn Frontend,
    rules: &[CombinationRule],
    action: &ActionDescriptor,
) {
    use ActionDescriptor::*;
    match action {
        Message(text) => show_message(session, text),
        AddItem(name) => add_item(session, frontend, rules, name),
        ToggleFlag {
            flag,
            when_true,
            when_false,
        } => toggle_flag(session, flag, when_true, when_false),
        PromptCode {
            valid_codes,
            on_success_item,
            prompt,
            success,
            fail,
        } => prompt_code(
            session,
            frontend,
            valid_codes,
            on_success_item.as_deref(),
            prompt,
            success,
            fail,
        ),
        EnterWord {
            solution,
            prompt,
            success,
            fail,
        } => enter_word(session, frontend, solution, prompt, success, fail),
        MessageWithFlag {
            flag,
            when_true,
            when_false,
        } => message_with_flag(session, flag, when_true, when_false),
        RevealIfFlagAndItems {
            flag,
            required_items,
            reveal,
            fail,
        } => reveal_if_flag_and_items(session, flag.as_deref(), required_items, reveal, fail),
        Unimplemented(kind) => {
            warn!("└─ action: Unimplemented(\"{kind}\")");
            session.show(&format!("Unimplemented action: {kind}"));
        },
    }
}

/// Codes match after trimming; nothing else is normalized.
pub fn normalize_code(text: &str) -> &str {
    text.trim()
}

/// Words match after trimming and uppercasing.
pub fn normalize_word(text: &str) -> String {
    text.trim().to_uppercase()
}

fn show_message(session: &mut Session, text: &str) {
    info!("└─ action: Message(\"{text}\")");
    session.show(text);
}

/// Adds an item, unless it is a variant of a tool the player already carries.
fn add_item(session: &mut Session, frontend: &mut dyn Frontend, rules: &[CombinationRule], name: &str) {
    info!("└─ action: AddItem(\"{name}\")");
    if let Some(rule) = family_already_held(rules, &session.state, name) {
        session.show(&format!("You already took the {}.", rule.family));
        return;
    }
    session.add_item(frontend, name);
}

fn toggle_flag(session: &mut Session, flag: &str, when_true: &str, when_false: &str) {
    let value = session.state.toggle_flag(flag);
    info!("└─ action: ToggleFlag(\"{flag}\") -> {value}");
    session.show(if value { when_true } else { when_false });
}

/// Ask the player for input. `None` means cancelled, empty, or the prompt couldn't open.
fn ask_entry(session: &mut Session, frontend: &mut dyn Frontend, prompt: &str) -> Option<String> {
    match session.prompt.ask(frontend, prompt) {
        Ok(outcome) => outcome.entry().map(str::to_string),
        Err(err) => {
            warn!("prompt \"{prompt}\" could not open: {err}");
            None
        },
    }
}

fn prompt_code(
    session: &mut Session,
    frontend: &mut dyn Frontend,
    valid_codes: &[String],
    on_success_item: Option<&str>,
    prompt: &str,
    success: &str,
    fail: &str,
) {
    info!("└─ action: PromptCode({} valid code(s))", valid_codes.len());
    let Some(entry) = ask_entry(session, frontend, prompt) else {
        session.show(NO_ENTRY);
        return;
    };

    let entered = normalize_code(&entry);
    if valid_codes.iter().any(|code| normalize_code(code) == entered) {
        if let Some(item) = on_success_item.filter(|item| !session.state.has_item(item)) {
            session.add_item(frontend, item);
        }
        info!("   code accepted");
        session.show(success);
    } else {
        info!("   code \"{entered}\" rejected");
        session.show(fail);
    }
}

fn enter_word(
    session: &mut Session,
    frontend: &mut dyn Frontend,
    solution: &str,
    prompt: &str,
    success: &str,
    fail: &str,
) {
    info!("└─ action: EnterWord");
    let Some(entry) = ask_entry(session, frontend, prompt) else {
        session.show(NO_ENTRY);
        return;
    };

    if normalize_word(&entry) == normalize_word(solution) {
        info!("   solution word accepted");
        session.show_for(success, session.timings.success);
    } else {
        info!("   word \"{entry}\" rejected");
        session.show_for(fail, session.timings.fail);
    }
}

fn message_with_flag(session: &mut Session, flag: &str, when_true: &str, when_false: &str) {
    let value = session.state.flag(flag);
    info!("└─ action: MessageWithFlag(\"{flag}\" = {value})");
    session.show(if value { when_true } else { when_false });
}

fn reveal_if_flag_and_items(
    session: &mut Session,
    flag: Option<&str>,
    required_items: &[String],
    reveal: &str,
    fail: &str,
) {
    let flag_ok = flag.is_none_or(|name| session.state.flag(name));
    let items_ok = session.state.has_all(required_items);
    info!("└─ action: RevealIfFlagAndItems(flag ok: {flag_ok}, items ok: {items_ok})");
    session.show(if flag_ok && items_ok { reveal } else { fail });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Dismissal;
    use crate::testing::ScriptedFrontend;

    fn locker(on_success_item: Option<&str>) -> ActionDescriptor {
        ActionDescriptor::PromptCode {
            valid_codes: vec!["312".into(), "213".into()],
            on_success_item: on_success_item.map(str::to_string),
            prompt: "Enter code:".into(),
            success: "Opened.".into(),
            fail: "Wrong code.".into(),
        }
    }

    fn chest() -> ActionDescriptor {
        ActionDescriptor::EnterWord {
            solution: "APPLE".into(),
            prompt: "Enter 5-letter code:".into(),
            success: "Escaped!".into(),
            fail: "Wrong word.".into(),
        }
    }

    fn run(session: &mut Session, frontend: &mut ScriptedFrontend, action: &ActionDescriptor) {
        dispatch_action(session, frontend, &[], action);
    }

    #[test]
    fn message_is_shown() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        run(&mut session, &mut frontend, &ActionDescriptor::Message("Hello.".into()));
        assert_eq!(session.messages.latest(), Some("Hello."));
    }

    #[test]
    fn codes_match_in_any_order_with_whitespace() {
        for typed in ["312", "  213 ", "\t312\n"] {
            let mut session = Session::default();
            let mut frontend = ScriptedFrontend::default();
            frontend.type_line(typed);
            run(&mut session, &mut frontend, &locker(Some("Batteries")));
            assert_eq!(session.messages.latest(), Some("Opened."), "typed {typed:?}");
            assert!(session.state.has_item("Batteries"));
        }
    }

    #[test]
    fn valid_codes_are_trimmed_too() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        frontend.type_line("42");
        let action = ActionDescriptor::PromptCode {
            valid_codes: vec![" 42 ".into()],
            on_success_item: None,
            prompt: "Code?".into(),
            success: "Yes.".into(),
            fail: "No.".into(),
        };
        run(&mut session, &mut frontend, &action);
        assert_eq!(session.messages.latest(), Some("Yes."));
    }

    #[test]
    fn wrong_code_shows_fail_text_and_adds_nothing() {
        for typed in [" 123 ", "3120", "31 2"] {
            let mut session = Session::default();
            let mut frontend = ScriptedFrontend::default();
            frontend.type_line(typed);
            run(&mut session, &mut frontend, &locker(Some("Batteries")));
            assert_eq!(session.messages.latest(), Some("Wrong code."));
            assert!(session.state.items().is_empty());
        }
    }

    #[test]
    fn code_success_skips_an_item_already_held() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        session.state.add_item("Batteries");
        frontend.type_line("213");
        run(&mut session, &mut frontend, &locker(Some("Batteries")));
        assert_eq!(session.state.items(), ["Batteries".to_string()]);
        assert!(frontend.renders.is_empty());
        assert_eq!(session.messages.latest(), Some("Opened."));
    }

    #[test]
    fn cancelled_or_empty_prompt_shows_no_entry() {
        let dismissals = [
            Dismissal::Cancel,
            Dismissal::Escape,
            Dismissal::OutsideClick,
            Dismissal::Confirm("   ".into()),
            Dismissal::Confirm(String::new()),
        ];
        for dismissal in dismissals {
            for action in [locker(Some("Batteries")), chest()] {
                let mut session = Session::default();
                let mut frontend = ScriptedFrontend::new([dismissal.clone()]);
                run(&mut session, &mut frontend, &action);
                assert_eq!(session.messages.latest(), Some(NO_ENTRY), "{dismissal:?}");
                assert!(session.state.items().is_empty());
                assert!(!session.prompt.is_open());
            }
        }
    }

    #[test]
    fn enter_word_is_case_insensitive_and_trimmed() {
        for typed in ["apple ", "APPLE", "Apple", "  aPpLe"] {
            let mut session = Session::default();
            let mut frontend = ScriptedFrontend::default();
            frontend.type_line(typed);
            run(&mut session, &mut frontend, &chest());
            assert_eq!(session.messages.latest(), Some("Escaped!"), "typed {typed:?}");
        }
    }

    #[test]
    fn enter_word_rejects_near_misses() {
        for typed in ["appl", "applee", "a pple"] {
            let mut session = Session::default();
            let mut frontend = ScriptedFrontend::default();
            frontend.type_line(typed);
            run(&mut session, &mut frontend, &chest());
            assert_eq!(session.messages.latest(), Some("Wrong word."), "typed {typed:?}");
        }
    }

    #[test]
    fn enter_word_uses_success_and_fail_durations() {
        use std::time::{Duration, Instant};

        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        frontend.type_line("apple");
        run(&mut session, &mut frontend, &chest());
        // success stays up longer than the default 3500ms
        let after = Instant::now();
        assert!(session.messages.visible_at(after + Duration::from_millis(4500)).is_some());

        frontend.type_line("pear");
        run(&mut session, &mut frontend, &chest());
        let after = Instant::now();
        assert_eq!(session.messages.latest(), Some("Wrong word."));
        assert!(session.messages.visible_at(after + Duration::from_millis(3000)).is_none());
    }

    #[test]
    fn toggle_flag_reports_new_state() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        let breaker = ActionDescriptor::ToggleFlag {
            flag: "powerOn".into(),
            when_true: "Power on.".into(),
            when_false: "Power off.".into(),
        };
        run(&mut session, &mut frontend, &breaker);
        assert!(session.state.flag("powerOn"));
        assert_eq!(session.messages.latest(), Some("Power on."));
        run(&mut session, &mut frontend, &breaker);
        assert!(!session.state.flag("powerOn"));
        assert_eq!(session.messages.latest(), Some("Power off."));
    }

    #[test]
    fn message_with_flag_reads_without_changing() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        let lamp = ActionDescriptor::MessageWithFlag {
            flag: "powerOn".into(),
            when_true: "Lit.".into(),
            when_false: "Dark.".into(),
        };
        run(&mut session, &mut frontend, &lamp);
        assert_eq!(session.messages.latest(), Some("Dark."));
        assert!(!session.state.flag("powerOn"));
        session.state.set_flag("powerOn", true);
        run(&mut session, &mut frontend, &lamp);
        assert_eq!(session.messages.latest(), Some("Lit."));
    }

    #[test]
    fn reveal_needs_flag_and_every_item() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        let poster = ActionDescriptor::RevealIfFlagAndItems {
            flag: Some("powerOn".into()),
            required_items: vec!["Lens".into(), "Lamp".into()],
            reveal: "Letters appear.".into(),
            fail: "Faded.".into(),
        };
        session.state.add_item("Lens");
        session.state.add_item("Lamp");
        run(&mut session, &mut frontend, &poster);
        assert_eq!(session.messages.latest(), Some("Faded."));

        session.state.set_flag("powerOn", true);
        session.state.remove_item("Lamp");
        run(&mut session, &mut frontend, &poster);
        assert_eq!(session.messages.latest(), Some("Faded."));

        session.state.add_item("Lamp");
        run(&mut session, &mut frontend, &poster);
        assert_eq!(session.messages.latest(), Some("Letters appear."));
    }

    #[test]
    fn reveal_without_flag_only_checks_items() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        let poster = ActionDescriptor::RevealIfFlagAndItems {
            flag: None,
            required_items: Vec::new(),
            reveal: "Letters appear.".into(),
            fail: "Faded.".into(),
        };
        run(&mut session, &mut frontend, &poster);
        assert_eq!(session.messages.latest(), Some("Letters appear."));
    }

    #[test]
    fn unimplemented_action_is_reported_not_raised() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        run(
            &mut session,
            &mut frontend,
            &ActionDescriptor::Unimplemented("playSound".into()),
        );
        assert_eq!(session.messages.latest(), Some("Unimplemented action: playSound"));
    }

    #[test]
    fn add_item_refuses_a_second_variant_of_a_held_tool() {
        let rules = [CombinationRule {
            family: "flashlight".into(),
            tool: "Flashlight (no batteries)".into(),
            part: "Batteries".into(),
            result: "Flashlight (powered)".into(),
            flag: None,
            assembled: "Assembled.".into(),
            consumed: "Consumed.".into(),
        }];
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        session.state.add_item("Flashlight (powered)");
        dispatch_action(
            &mut session,
            &mut frontend,
            &rules,
            &ActionDescriptor::AddItem("Flashlight (no batteries)".into()),
        );
        assert_eq!(session.state.items(), ["Flashlight (powered)".to_string()]);
        assert_eq!(session.messages.latest(), Some("You already took the flashlight."));
    }

    #[test]
    fn prompt_refuses_to_stack() {
        let mut session = Session::default();
        let mut frontend = ScriptedFrontend::default();
        frontend.type_line("213");
        session.prompt.open("someone else's prompt").unwrap();
        run(&mut session, &mut frontend, &locker(Some("Batteries")));
        assert_eq!(session.messages.latest(), Some(NO_ENTRY));
        assert!(frontend.prompts_seen.is_empty());
        assert_eq!(session.prompt.open_text(), Some("someone else's prompt"));
    }
}
