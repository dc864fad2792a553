//! Shell profile

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn bash() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Bash",
        extensions: &["sh", "bash", "zsh"],
        keywords: &[
            "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until",
            "do", "done", "in", "function", "select", "time", "coproc", "local", "return",
            "exit", "break", "continue", "export", "readonly", "declare", "typeset", "unset",
            "shift", "trap", "source",
        ],
        builtins: &[
            "echo", "printf", "read", "cd", "pwd", "pushd", "popd", "dirs", "let", "eval",
            "set", "test", "true", "false", "exec", "command", "type", "hash", "alias",
            "unalias", "bind", "builtin", "caller", "enable", "help", "logout", "mapfile",
            "readarray", "ulimit", "umask",
        ],
        line_comment: Some("#"),
        string_delimiters: &['"', '\''],
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
