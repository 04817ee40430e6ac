//! Color utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
}

/// Environment facts that decide whether ANSI codes are emitted
#[derive(Debug, Clone, Default)]
pub struct TerminalEnv {
    pub no_color: bool,
    pub force_color: Option<String>,
    pub term: Option<String>,
    pub is_terminal: bool,
}

impl TerminalEnv {
    pub fn detect() -> Self {
        use std::io::IsTerminal;

        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            force_color: std::env::var("FORCE_COLOR").ok(),
            term: std::env::var("TERM").ok(),
            is_terminal: std::io::stdout().is_terminal(),
        }
    }

    pub fn supports_formatting(&self) -> bool {
        if self.no_color || self.force_color.as_deref() == Some("0") {
            return false;
        }
        if self.force_color.is_some() {
            return true;
        }
        if !self.is_terminal {
            return false;
        }
        match self.term.as_deref() {
            Some("dumb") | Some("") | None => false,
            Some(_) => true,
        }
    }
}

/// Terminal capability detection for stdout
pub fn supports_formatting() -> bool {
    if cfg!(test) {
        return false;
    }
    TerminalEnv::detect().supports_formatting()
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}
