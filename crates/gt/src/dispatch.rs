//! The generic executor behind the dispatch table.
//!
//! Looks up the mnemonic, materializes the templated argv, runs the child
//! processes in order, and applies the in-process output filters that replace
//! the shell pipeline utilities (`cat -n`, `head`). The exit code handed back
//! to `main` is the code of the last child actually run.

use std::path::Path;

use anyhow::{Result, bail};

use crate::help;
use crate::table::{self, Action, CommandEntry, Filter, Invocation, Tok};

/// Dispatch one invocation of the tool.
///
/// `tokens` is the raw tail from the command line: the mnemonic followed by
/// its free-form arguments. Returns the exit code to terminate with -- the
/// last child's code, or 0 for the help path.
pub fn dispatch(tokens: &[String], cwd: &Path) -> Result<i32> {
    let Some((mnemonic, args)) = tokens.split_first() else {
        help::print_usage();
        return Ok(0);
    };

    match table::lookup(mnemonic) {
        Some(entry) => run_entry(entry, args, cwd),
        None => {
            help::print_usage();
            Ok(0)
        }
    }
}

fn run_entry(entry: &CommandEntry, args: &[String], cwd: &Path) -> Result<i32> {
    match entry.action {
        Action::Run(invocations) => run_sequence(invocations, args, cwd),
        Action::Checkout => run_checkout(args.first().map(String::as_str), cwd),
        Action::Show => match args.first() {
            Some(rev) => Ok(gt_git::run(&["show".to_string(), rev.clone()], cwd)?),
            None => {
                help::print_usage();
                Ok(0)
            }
        },
    }
}

/// Run a sequence of invocations, aborting on the first non-zero exit.
///
/// The failing child's code is what the caller sees; the remaining
/// invocations of a composite are not run.
fn run_sequence(invocations: &[Invocation], args: &[String], cwd: &Path) -> Result<i32> {
    let mut code = 0;
    for invocation in invocations {
        let argv = materialize(invocation.args, args);
        code = execute(&argv, invocation.filter, cwd)?;
        if code != 0 {
            break;
        }
    }
    Ok(code)
}

/// Run one materialized invocation and return its exit code.
fn execute(argv: &[String], filter: Filter, cwd: &Path) -> Result<i32> {
    match filter {
        Filter::Passthrough => Ok(gt_git::run(argv, cwd)?),
        Filter::NumberLines | Filter::FirstLines(_) => match gt_git::capture(argv, cwd) {
            Ok(stdout) => {
                print!("{}", apply_filter(&stdout, filter));
                Ok(0)
            }
            // stderr was inherited, so the child's diagnostics are already
            // on the terminal; carry its exit code.
            Err(gt_git::GitError::CommandFailed { code }) => Ok(code.unwrap_or(1)),
            Err(err) => Err(err.into()),
        },
    }
}

/// Materialize a templated argv against the caller's arguments.
///
/// An `Arg2` slot with no argument available vanishes from argv, the way an
/// unquoted `$2` expands to nothing in a shell.
fn materialize(template: &[Tok], args: &[String]) -> Vec<String> {
    let mut argv = Vec::with_capacity(template.len() + args.len());
    for tok in template {
        match tok {
            Tok::Lit(word) => argv.push((*word).to_string()),
            Tok::Arg2 => {
                if let Some(arg) = args.first() {
                    argv.push(arg.clone());
                }
            }
            Tok::Rest => argv.extend(args.iter().cloned()),
        }
    }
    argv
}

/// Apply an output filter to captured stdout.
fn apply_filter(stdout: &str, filter: Filter) -> String {
    match filter {
        Filter::Passthrough => stdout.to_string(),
        Filter::NumberLines => stdout
            .lines()
            .enumerate()
            .map(|(index, line)| format!("{:>3}  {line}\n", index + 1))
            .collect(),
        Filter::FirstLines(count) => stdout
            .lines()
            .take(count)
            .map(|line| format!("{line}\n"))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// The branch-resolving checkout.
///
/// A numeric argument is a 1-based position in the `git branch` listing (the
/// same listing `gt b` numbers); anything else is the branch name verbatim.
/// No argument at all runs a bare `git checkout`, exactly as the placeholder
/// omission rule would.
fn run_checkout(target: Option<&str>, cwd: &Path) -> Result<i32> {
    let mut argv = vec!["checkout".to_string()];
    match target {
        Some(position) if is_position(position) => {
            let listing = gt_git::capture(&["branch".to_string()], cwd)?;
            let branch = position
                .parse()
                .ok()
                .and_then(|index| branch_at(&listing, index));
            match branch {
                Some(branch) => argv.push(branch.to_string()),
                None => bail!("no branch at position {position} (see `gt b`)"),
            }
        }
        Some(branch) => argv.push(branch.to_string()),
        None => {}
    }
    Ok(gt_git::run(&argv, cwd)?)
}

fn is_position(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

/// Resolve a 1-based position in a `git branch` listing to a branch name.
///
/// The current-branch `*` and worktree `+` markers are stripped before
/// trimming. Returns `None` for position 0, positions past the end of the
/// listing, and lines that trim to nothing.
fn branch_at(listing: &str, position: usize) -> Option<&str> {
    let line = listing.lines().nth(position.checked_sub(1)?)?;
    let name = line.trim_start().trim_start_matches(['*', '+']).trim();
    if name.is_empty() { None } else { Some(name) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
