//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.
use std::fmt::Write;

use colored::Colorize;
use textwrap::{Options, fill, termwidth};

use crate::style::GameStyle;

pub mod view_item;

pub use view_item::{HotspotLine, ViewItem};

/// Top-level output sections, printed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Environment,
    DirectResult,
    System,
    Status,
}

/// Wrapping options for ordinary paragraphs at the current width.
fn normal_block(width: usize) -> Options<'static> {
    Options::new(width.saturating_sub(2).max(20))
}

fn indented_block(width: usize) -> Options<'static> {
    normal_block(width).initial_indent("   ").subsequent_indent("   ")
}

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Compose and display everything queued this turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        let frame = self.compose();
        if !frame.is_empty() {
            print!("{frame}");
        }
        self.items.clear();
    }

    /// Render the queued items into a single block of text.
    pub fn compose(&self) -> String {
        let mut out = String::new();
        for section in [Section::Environment, Section::DirectResult, Section::System, Section::Status] {
            let entries: Vec<&ViewItem> = self.items.iter().filter(|item| item.section() == section).collect();
            if entries.is_empty() {
                continue;
            }
            if let Some(label) = section_label(section) {
                let _ = writeln!(out, "{:.>width$}\n", label.section_style(), width = self.width);
            }
            for item in entries {
                self.render_item(&mut out, item);
            }
        }
        out
    }

    fn render_item(&self, out: &mut String, item: &ViewItem) {
        match item {
            ViewItem::RoomHeader {
                number,
                total,
                name,
                color,
            } => {
                let _ = writeln!(out, "{}  {}", name.room_titlebar_style(*color), format!("({number}/{total})").dimmed());
            },
            ViewItem::HotspotList(lines) => self.hotspot_list(out, lines),
            ViewItem::Message(text) => {
                let _ = writeln!(out, "{}\n", fill(text, normal_block(self.width)).message_style());
            },
            ViewItem::Error(text) => {
                let _ = writeln!(out, "{} {}\n", "⚠︎".error_style(), fill(text, normal_block(self.width)).error_style());
            },
            ViewItem::Inventory(items) => inventory(out, items),
            ViewItem::InventoryBar(_) => {
                // only the newest redraw of the bar matters
                let latest = self.items.iter().rev().find(|queued| queued.is_inventory_bar());
                if latest.is_some_and(|latest| std::ptr::eq(latest, item)) {
                    inventory_bar(out, item);
                }
            },
            ViewItem::EngineMessage(text) => {
                let _ = writeln!(out, "{}\n", fill(text, normal_block(self.width)).italic());
            },
            ViewItem::FlagList(flags) => flag_list(out, flags),
            ViewItem::Help { basic_text, commands } => {
                let _ = writeln!(out, "{}\n", fill(basic_text, normal_block(self.width)).italic().cyan());
                let _ = writeln!(out, "{}\n", "Commands:".bold().yellow());
                for command in commands {
                    let line = format!("{} - {}", command.command.bold().green(), command.description.italic());
                    let _ = writeln!(out, "{}", fill(&line, indented_block(self.width)));
                }
                out.push('\n');
            },
            ViewItem::QuitSummary {
                title,
                items_found,
                rooms,
            } => {
                let _ = writeln!(out, "{:^width$}", title.as_str().black().on_yellow(), width = self.width);
                let _ = writeln!(out, "{:10} {}", "Items:", items_found);
                let _ = writeln!(out, "{:10} {}", "Rooms:", rooms);
            },
        }
    }

    fn hotspot_list(&self, out: &mut String, lines: &[HotspotLine]) {
        if lines.is_empty() {
            let _ = writeln!(out, "   {}\n", "Nothing here stands out.".italic().dimmed());
            return;
        }
        for line in lines {
            let _ = writeln!(out, "   {:>2}. {}", line.number, line.label.hotspot_style());
        }
        out.push('\n');
    }
}

fn section_label(section: Section) -> Option<&'static str> {
    match section {
        Section::Environment => Some("room"),
        Section::DirectResult => Some("results"),
        Section::System => Some("game"),
        Section::Status => None,
    }
}

fn inventory(out: &mut String, items: &[String]) {
    let _ = writeln!(out, "{}:", "Inventory".subheading_style());
    if items.is_empty() {
        let _ = writeln!(out, "   {}", "You have... nothing at all.".italic().dimmed());
    } else {
        for item in items {
            let _ = writeln!(out, "   {}", item.item_style());
        }
    }
    out.push('\n');
}

fn inventory_bar(out: &mut String, item: &ViewItem) {
    if let ViewItem::InventoryBar(items) = item {
        let listed = if items.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            items.iter().map(|i| i.item_style().to_string()).collect::<Vec<_>>().join(" | ")
        };
        let _ = writeln!(out, "{} {listed}", "Inventory:".subheading_style());
    }
}

fn flag_list(out: &mut String, flags: &[(String, bool)]) {
    let _ = writeln!(out, "{}:", "Flags".subheading_style());
    if flags.is_empty() {
        let _ = writeln!(out, "   {}", "(none set)".dimmed());
    }
    for (name, value) in flags {
        let styled = if *value { name.flag_on_style() } else { name.flag_off_style() };
        let _ = writeln!(out, "   {styled} = {value}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomColor;

    fn view_with(items: Vec<ViewItem>) -> View {
        View { width: 80, items }
    }

    #[test]
    fn sections_print_in_fixed_order() {
        let view = view_with(vec![
            ViewItem::EngineMessage("Bye".into()),
            ViewItem::Message("Added: Key".into()),
            ViewItem::RoomHeader {
                number: 1,
                total: 4,
                name: "Office".into(),
                color: RoomColor::from(0xffeedc),
            },
        ]);
        let out = view.compose();
        let room = out.find("Office").unwrap();
        let result = out.find("Added: Key").unwrap();
        let game = out.find("Bye").unwrap();
        assert!(room < result && result < game);
    }

    #[test]
    fn only_the_latest_inventory_bar_is_drawn() {
        let view = view_with(vec![
            ViewItem::InventoryBar(vec!["Old Map".into()]),
            ViewItem::InventoryBar(vec!["Fresh Key".into()]),
        ]);
        let out = view.compose();
        assert!(!out.contains("Old Map"));
        assert!(out.contains("Fresh Key"));
    }

    #[test]
    fn empty_hotspot_list_says_so() {
        let view = view_with(vec![ViewItem::HotspotList(Vec::new())]);
        assert!(view.compose().contains("Nothing here stands out."));
    }

    #[test]
    fn nothing_queued_composes_nothing() {
        assert!(view_with(Vec::new()).compose().is_empty());
    }
}
