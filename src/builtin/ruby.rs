//! Ruby and PHP profiles

use crate::error::Result;
use crate::profile::{LanguageProfile, ProfileSpec};

pub fn ruby() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "Ruby",
        extensions: &["rb", "rake", "gemspec"],
        keywords: &[
            "BEGIN", "END", "alias", "and", "begin", "break", "case", "class", "def",
            "defined?", "do", "else", "elsif", "end", "ensure", "false", "for", "if", "in",
            "module", "next", "nil", "not", "or", "redo", "rescue", "retry", "return",
            "self", "super", "then", "true", "undef", "unless", "until", "when", "while",
            "yield", "__FILE__", "__LINE__", "__ENCODING__", "attr_reader", "attr_writer",
            "attr_accessor", "private", "protected", "public", "require", "require_relative",
            "include", "extend", "prepend", "raise", "lambda", "proc",
        ],
        builtins: &[
            "Array", "Hash", "String", "Integer", "Float", "Symbol", "TrueClass",
            "FalseClass", "NilClass", "Object", "Class", "Module", "Proc", "Method", "Range",
            "Regexp", "IO", "File", "Dir", "Time", "Date", "puts", "print", "p", "gets",
            "chomp", "to_s", "to_i", "to_f", "to_a",
        ],
        line_comment: Some("#"),
        block_comment: Some(("=begin", "=end")),
        string_delimiters: &['"', '\''],
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}

pub fn php() -> Result<LanguageProfile> {
    ProfileSpec {
        name: "PHP",
        extensions: &["php", "phtml", "php3", "php4", "php5", "phps"],
        keywords: &[
            "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
            "clone", "const", "continue", "declare", "default", "die", "do", "echo", "else",
            "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch",
            "endwhile", "eval", "exit", "extends", "final", "finally", "for", "foreach",
            "function", "global", "goto", "if", "implements", "include", "include_once",
            "instanceof", "insteadof", "interface", "isset", "list", "namespace", "new",
            "or", "print", "private", "protected", "public", "require", "require_once",
            "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var",
            "while", "xor", "yield", "yield from", "fn", "match",
        ],
        builtins: &[
            "true", "false", "null", "self", "parent", "this", "__CLASS__", "__DIR__",
            "__FILE__", "__FUNCTION__", "__LINE__", "__METHOD__", "__NAMESPACE__",
            "__TRAIT__",
        ],
        line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        string_delimiters: &['"', '\''],
        class_names: true,
        operators: true,
        identifiers: true,
        ..ProfileSpec::default()
    }
    .build()
}
