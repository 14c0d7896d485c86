//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

use crate::room::RoomColor;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn hotspot_style(&self) -> ColoredString;
    /// Room name over the room's own background color.
    fn room_titlebar_style(&self, color: RoomColor) -> ColoredString;
    fn message_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn flag_on_style(&self) -> ColoredString;
    fn flag_off_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{}]", self);
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn hotspot_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn room_titlebar_style(&self, color: RoomColor) -> ColoredString {
        // dark text on light rooms, light text on dark ones
        let luma = 299 * u32::from(color.r) + 587 * u32::from(color.g) + 114 * u32::from(color.b);
        let styled = format!(" {} ", self).on_truecolor(color.r, color.g, color.b).bold();
        if luma > 128_000 {
            styled.truecolor(20, 20, 20)
        } else {
            styled.truecolor(240, 240, 240)
        }
    }
    fn message_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn flag_on_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn flag_off_style(&self) -> ColoredString {
        self.dimmed().truecolor(150, 150, 150)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn hotspot_style(&self) -> ColoredString {
        self.as_str().hotspot_style()
    }
    fn room_titlebar_style(&self, color: RoomColor) -> ColoredString {
        self.as_str().room_titlebar_style(color)
    }
    fn message_style(&self) -> ColoredString {
        self.as_str().message_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn flag_on_style(&self) -> ColoredString {
        self.as_str().flag_on_style()
    }
    fn flag_off_style(&self) -> ColoredString {
        self.as_str().flag_off_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
