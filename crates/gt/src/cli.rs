//! Clap CLI definitions for the `gt` command.
//!
//! clap handles only the outer shell: global flags and the free-form token
//! tail. Mnemonic lookup is a case-sensitive table match in [`crate::table`],
//! not clap subcommand matching -- `s` and `S` are distinct entries, `?` is a
//! valid mnemonic, and an unknown token must print help and exit 0, none of
//! which clap subcommands express.

use clap::{Args, Parser};

/// gt -- mnemonic shortcuts for everyday git commands.
#[derive(Parser, Debug)]
#[command(
    name = "gt",
    about = "Mnemonic shortcuts for everyday git commands",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Mnemonic followed by its free-form arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Global flags accepted in front of the mnemonic.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Run as if gt was started in <DIR> instead of the current directory.
    #[arg(short = 'C', value_name = "DIR")]
    pub dir: Option<String>,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_before_mnemonic_are_global() {
        let cli = Cli::try_parse_from(["gt", "-v", "-C", "/tmp", "s"]).unwrap();
        assert!(cli.global.verbose);
        assert_eq!(cli.global.dir.as_deref(), Some("/tmp"));
        assert_eq!(cli.rest, vec!["s"]);
    }

    #[test]
    fn tokens_after_mnemonic_pass_through_verbatim() {
        // Once the mnemonic is seen, everything (hyphens included) belongs
        // to the token tail.
        let cli = Cli::try_parse_from(["gt", "c", "-m"]).unwrap();
        assert!(!cli.global.verbose);
        assert_eq!(cli.rest, vec!["c", "-m"]);
    }

    #[test]
    fn question_mark_is_an_ordinary_token() {
        let cli = Cli::try_parse_from(["gt", "?", "HEAD~2"]).unwrap();
        assert_eq!(cli.rest, vec!["?", "HEAD~2"]);
    }
}
