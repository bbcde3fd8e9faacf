use std::fmt::Write;

use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// Console logger. Quiet mode suppresses narration but keeps warnings
/// and errors visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    quiet: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn with_quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.quiet && matches!(level, LogLevel::Success | LogLevel::Info) {
            return;
        }
        println!("{}", self.render_colored_line(level, message.as_ref()));
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Success, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    fn render_colored_line(&self, level: LogLevel, message: &str) -> String {
        let mut out = String::new();
        let (emoji, color) = level.visuals();

        out.push_str(emoji);
        out.push(' ');
        out.push_str(&self.render_signature());
        out.push(' ');
        out.push_str(&self.render_status(level, color));
        out.push(' ');
        out.push_str(message);
        out
    }

    fn render_signature(&self) -> String {
        let mut s = String::new();
        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push('[');
        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 0,
                g: 150,
                b: 136,
            })
        )
        .unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str("Paramscan");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();
        s
    }

    fn render_status(&self, level: LogLevel, color: Color) -> String {
        let mut s = String::new();
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push('[');
        s.push_str(level.as_label());
        s.push(']');
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        write!(&mut s, "{}", ResetColor).unwrap();
        s
    }
}

impl LogLevel {
    fn as_label(self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
        }
    }

    fn visuals(self) -> (&'static str, Color) {
        match self {
            LogLevel::Success => (
                "✅",
                Color::Rgb {
                    r: 76,
                    g: 175,
                    b: 80,
                },
            ),
            LogLevel::Error => (
                "❌",
                Color::Rgb {
                    r: 244,
                    g: 67,
                    b: 54,
                },
            ),
            LogLevel::Info => (
                "ℹ️ ",
                Color::Rgb {
                    r: 33,
                    g: 150,
                    b: 243,
                },
            ),
            LogLevel::Warning => (
                "⚠️",
                Color::Rgb {
                    r: 255,
                    g: 152,
                    b: 0,
                },
            ),
        }
    }
}
