use crate::runtime::types::{TypeDescriptor, TypeOrigin};
use crossterm::style::Stylize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for command output
pub struct Formatter;

impl Formatter {
    /// Format a resolved short name.
    pub fn format_resolution(short_name: &str, class_name: &str) -> String {
        format!("{} => {}", short_name, class_name)
    }

    /// Format one type with its ancestry and origin.
    pub fn format_type(descriptor: &TypeDescriptor) -> String {
        let origin = match descriptor.origin() {
            TypeOrigin::Host => "host",
            TypeOrigin::Mock => "mock",
        };
        let handler = if descriptor.dispatch_handler().is_some() {
            " [magic accessors]"
        } else {
            ""
        };
        format!("{:<5} {}{}", origin, descriptor.ancestry(), handler)
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
