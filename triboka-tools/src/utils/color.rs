// Copyright 2026, Triboka

//! Terminal colors for log output.

use std::fmt::{Debug, Display};

pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const RESET: &str = "\x1b[0;0m";

pub trait Color: Display {
    fn color(&self, hue: &str) -> String {
        format!("{hue}{self}{RESET}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

impl<T: Display> Color for T {}

pub trait DebugColor: Debug {
    fn debug_color(&self, hue: &str) -> String {
        format!("{hue}{self:?}{RESET}")
    }

    fn debug_lavender(&self) -> String {
        self.debug_color(LAVENDER)
    }
}

impl<T: Debug> DebugColor for T {}
