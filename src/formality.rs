//! Formality heuristic: how much a text reads like code or assembly.
//!
//! Counts non-overlapping, case-insensitive matches of a fixed vocabulary: `uint64_t`,
//! snake_case identifiers, character literals, digits, arithmetic/comparison/logical
//! operators, and RISC-V mnemonics. Alternatives are tried left to right, so the more
//! specific patterns come first.

use std::sync::LazyLock;

use regex::Regex;

static FORMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)",
        r"uint64_t\*?",
        r"|_?[a-z]+(?:_[a-z]+)+",
        r"|'.'",
        r"|\d",
        r"|\+|-|\*|/|%|\|",
        r"|==|!=|<=|<|>=|>|=",
        r"|lui|addi|ld|sd|add|sub|mul|divu|remu|sltu|beq|jalr|jal|ecall",
    ))
    .unwrap()
});

/// Number of formal-pattern matches in `text`.
pub fn formality(text: &str) -> u64 {
    FORMAL_PATTERN.find_iter(text).count() as u64
}
