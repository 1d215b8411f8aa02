//! CLI command messaging
//!
//! Consistent tagged console lines for subcommands and session summaries.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tone::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tone::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tone::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// One tagged line; details follow the title after a tab.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tone.tag(), title)
    } else {
        format!("{} {}\t {}", tone.tag(), title, details)
    }
}

pub fn print_line(tone: Tone, title: &str, details: &str) {
    match tone {
        Tone::Error => eprintln!("{}", format_line(tone, title, details)),
        _ => println!("{}", format_line(tone, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_are_tab_separated() {
        assert_eq!(
            format_line(Tone::Info, "Feed", "5 donations"),
            "\x1b[1;33m[INFO]\x1b[0m Feed\t 5 donations"
        );
        assert_eq!(
            format_line(Tone::Success, "Done", ""),
            "\x1b[1;32m[SUCCESS]\x1b[0m Done"
        );
    }
}
