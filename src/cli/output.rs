use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "INFO",
        MessageKind::Success => "OK",
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
        MessageKind::Section => "",
    }
}

pub fn styled(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{}: {}", label(kind), text),
    };
    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn section(message: impl fmt::Display) {
    println!("\n{}", styled(MessageKind::Section, message));
}

pub fn info(message: impl fmt::Display) {
    println!("{}", styled(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", styled(MessageKind::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    eprintln!("{}", styled(MessageKind::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", styled(MessageKind::Error, message));
}

/// Disables ANSI styling, e.g. for `--plain` or non-terminal output.
pub fn set_plain(plain: bool) {
    if plain {
        colored::control::set_override(false);
    }
}
