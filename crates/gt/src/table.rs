//! The static mnemonic dispatch table.
//!
//! One [`CommandEntry`] per mnemonic, each carrying a tagged [`Action`] that
//! the executor in [`crate::dispatch`] interprets. The table is fixed at
//! build time and immutable at run time. Mnemonics are case-sensitive: `s`
//! (short status) and `S` (stash) are distinct entries.

// ---------------------------------------------------------------------------
// Action model
// ---------------------------------------------------------------------------

/// One argv word of a templated git invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tok {
    /// A literal word.
    Lit(&'static str),
    /// The caller's second positional argument (the word after the
    /// mnemonic). Unset, the word is omitted from argv entirely, the way an
    /// unquoted `$2` expands to nothing in a shell.
    Arg2,
    /// All caller arguments after the mnemonic, spliced in order.
    Rest,
}

/// In-process post-processing applied to a captured invocation's stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Stream directly to the terminal, no capture.
    Passthrough,
    /// Prefix each line with its 1-based position.
    NumberLines,
    /// Keep only the first `n` lines.
    FirstLines(usize),
}

/// A single templated git invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub args: &'static [Tok],
    pub filter: Filter,
}

/// What a mnemonic does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One or more invocations, run in declared order. Composites abort on
    /// the first non-zero exit and propagate its code.
    Run(&'static [Invocation]),
    /// Checkout by branch name, or by 1-based position in the `b` listing
    /// when the argument is numeric.
    Checkout,
    /// `? <ref>` shows the object at `<ref>`; a bare `?` is the help token.
    Show,
}

/// One row of the dispatch table.
#[derive(Debug)]
pub struct CommandEntry {
    pub mnemonic: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
    pub action: Action,
}

// ---------------------------------------------------------------------------
// Shared invocations
// ---------------------------------------------------------------------------

use Filter::{FirstLines, NumberLines, Passthrough};
use Tok::{Arg2, Lit, Rest};

const LOG_ARGS: &[Tok] = &[Lit("log"), Lit("--oneline")];

/// `git branch`, numbered so the positions line up with `co N`.
const BRANCHES: Invocation = Invocation {
    args: &[Lit("branch")],
    filter: NumberLines,
};

/// `git status -s`.
const STATUS: Invocation = Invocation {
    args: &[Lit("status"), Lit("-s")],
    filter: Passthrough,
};

/// `git log --oneline`.
const LOG: Invocation = Invocation {
    args: LOG_ARGS,
    filter: Passthrough,
};

/// The first three lines of `git log --oneline`, for the `i` summary.
const LOG_HEAD: Invocation = Invocation {
    args: LOG_ARGS,
    filter: FirstLines(3),
};

/// `git commit --amend --no-edit`.
const AMEND: Invocation = Invocation {
    args: &[Lit("commit"), Lit("--amend"), Lit("--no-edit")],
    filter: Passthrough,
};

/// `git pull`.
const PULL: Invocation = Invocation {
    args: &[Lit("pull")],
    filter: Passthrough,
};

/// `git push`.
const PUSH: Invocation = Invocation {
    args: &[Lit("push")],
    filter: Passthrough,
};

/// `git stash`.
const STASH: Invocation = Invocation {
    args: &[Lit("stash")],
    filter: Passthrough,
};

/// `git stash pop`.
const STASH_POP: Invocation = Invocation {
    args: &[Lit("stash"), Lit("pop")],
    filter: Passthrough,
};

/// `git stash clear`.
const STASH_CLEAR: Invocation = Invocation {
    args: &[Lit("stash"), Lit("clear")],
    filter: Passthrough,
};

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

/// Every mnemonic the dispatcher knows, in help-text order.
pub static TABLE: &[CommandEntry] = &[
    CommandEntry {
        mnemonic: "a",
        usage: "a [files]",
        about: "stage files",
        action: Action::Run(&[Invocation {
            args: &[Lit("add"), Rest],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "ac",
        usage: "ac <file>",
        about: "stage file, then amend commit",
        action: Action::Run(&[
            Invocation {
                args: &[Lit("add"), Arg2],
                filter: Passthrough,
            },
            AMEND,
        ]),
    },
    CommandEntry {
        mnemonic: "am",
        usage: "am",
        about: "amend commit",
        action: Action::Run(&[AMEND]),
    },
    CommandEntry {
        mnemonic: "b",
        usage: "b",
        about: "list branches, numbered",
        action: Action::Run(&[BRANCHES]),
    },
    CommandEntry {
        mnemonic: "c",
        usage: "c <msg>",
        about: "commit with message",
        action: Action::Run(&[Invocation {
            args: &[Lit("commit"), Lit("-m"), Arg2],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "cd",
        usage: "cd <url>",
        about: "shallow clone (depth 1)",
        action: Action::Run(&[Invocation {
            args: &[Lit("clone"), Lit("--depth"), Lit("1"), Arg2],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "co",
        usage: "co <branch|N>",
        about: "checkout by name, or by position in the `b` listing",
        action: Action::Checkout,
    },
    CommandEntry {
        mnemonic: "d",
        usage: "d",
        about: "show working-tree diff",
        action: Action::Run(&[Invocation {
            args: &[Lit("diff")],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "gc",
        usage: "gc <pattern>",
        about: "search pattern across all commit contents",
        action: Action::Run(&[Invocation {
            args: &[Lit("log"), Lit("--all"), Lit("--oneline"), Lit("-S"), Arg2],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "gl",
        usage: "gl <pattern>",
        about: "search commit messages",
        action: Action::Run(&[Invocation {
            args: &[Lit("log"), Lit("--all"), Lit("--oneline"), Lit("--grep"), Arg2],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "i",
        usage: "i",
        about: "print branches, status, and the last 3 log lines",
        action: Action::Run(&[BRANCHES, STATUS, LOG_HEAD]),
    },
    CommandEntry {
        mnemonic: "l",
        usage: "l",
        about: "oneline log",
        action: Action::Run(&[LOG]),
    },
    CommandEntry {
        mnemonic: "p",
        usage: "p",
        about: "pull",
        action: Action::Run(&[PULL]),
    },
    CommandEntry {
        mnemonic: "pp",
        usage: "pp",
        about: "pull, then push",
        action: Action::Run(&[PULL, PUSH]),
    },
    CommandEntry {
        mnemonic: "P",
        usage: "P",
        about: "push",
        action: Action::Run(&[PUSH]),
    },
    CommandEntry {
        mnemonic: "s",
        usage: "s",
        about: "short status",
        action: Action::Run(&[STATUS]),
    },
    CommandEntry {
        mnemonic: "sc",
        usage: "sc",
        about: "clear the stash",
        action: Action::Run(&[STASH_CLEAR]),
    },
    CommandEntry {
        mnemonic: "Sc",
        usage: "Sc",
        about: "clear the stash",
        action: Action::Run(&[STASH_CLEAR]),
    },
    CommandEntry {
        mnemonic: "sh",
        usage: "sh",
        about: "stash working-tree changes",
        action: Action::Run(&[STASH]),
    },
    CommandEntry {
        mnemonic: "S",
        usage: "S",
        about: "stash working-tree changes",
        action: Action::Run(&[STASH]),
    },
    CommandEntry {
        mnemonic: "sp",
        usage: "sp",
        about: "pop the latest stash",
        action: Action::Run(&[STASH_POP]),
    },
    CommandEntry {
        mnemonic: "Sp",
        usage: "Sp",
        about: "pop the latest stash",
        action: Action::Run(&[STASH_POP]),
    },
    CommandEntry {
        mnemonic: "t",
        usage: "t",
        about: "show staged diff",
        action: Action::Run(&[Invocation {
            args: &[Lit("diff"), Lit("--cached")],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "u",
        usage: "u",
        about: "undo last commit (soft reset)",
        action: Action::Run(&[Invocation {
            args: &[Lit("reset"), Lit("--soft"), Lit("HEAD~1")],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "U",
        usage: "U",
        about: "show unpushed commits",
        action: Action::Run(&[Invocation {
            args: &[Lit("log"), Lit("--oneline"), Lit("@{u}..")],
            filter: Passthrough,
        }]),
    },
    CommandEntry {
        mnemonic: "?",
        usage: "? [ref]",
        about: "show object at ref (bare ? prints this help)",
        action: Action::Show,
    },
];

/// Look up a mnemonic by exact, case-sensitive match.
pub fn lookup(mnemonic: &str) -> Option<&'static CommandEntry> {
    TABLE.iter().find(|entry| entry.mnemonic == mnemonic)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
