//! Static usage text enumerating every mnemonic.
//!
//! Shown for the bare `?` token, an unknown mnemonic, or no mnemonic at all.
//! Always exits successfully: asking for help is not a failure.

use std::io::{self, Write};

use crate::table::TABLE;

/// Print the usage table to stdout.
pub fn print_usage() {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Ignore broken pipe errors (e.g., piped to `head`)
    let _ = write!(handle, "{}", render_usage());
}

/// Render the usage table, one column-aligned line per mnemonic.
fn render_usage() -> String {
    let width = TABLE
        .iter()
        .map(|entry| entry.usage.len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("gt -- mnemonic shortcuts for everyday git commands\n\n");
    for entry in TABLE {
        text.push_str(&format!(
            "  gt {:<width$}  {}\n",
            entry.usage, entry.about
        ));
    }
    text.push_str("\nAnything else prints this help.\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_mnemonic() {
        let text = render_usage();
        for entry in TABLE {
            assert!(
                text.contains(&format!("gt {}", entry.usage)),
                "help text is missing {:?}",
                entry.mnemonic
            );
            assert!(text.contains(entry.about), "missing about for {:?}", entry.mnemonic);
        }
    }

    #[test]
    fn about_column_is_aligned() {
        let width = TABLE.iter().map(|entry| entry.usage.len()).max().unwrap();
        let text = render_usage();
        let lines = text.lines().filter(|line| line.starts_with("  gt "));
        for (entry, line) in TABLE.iter().zip(lines) {
            // "  gt " + padded usage + "  " puts every about at width + 7.
            assert_eq!(&line[width + 7..], entry.about);
        }
    }
}
