//! The riddle catalog: fifty named arithmetic rules.
//!
//! Every rule maps two small operands to an integer result. The displayed
//! `a + b = result` lines use `+` as misdirection; the real rule is whatever
//! the pattern computes. `label` is the short formula printed on the answer
//! card; `describe` carries a longer hint for the families whose formula text
//! alone does not give the trick away.

/// A named arithmetic rule over two operands.
///
/// Rules are total over the generator's operand range (1..=9) and
/// deterministic. The catalog is fixed at compile time and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    id: u8,
    label: &'static str,
    describe: Option<&'static str>,
    compute: fn(i64, i64) -> i64,
}

/// Base-10 digit concatenation: `join_digits(12, 3) == 123`.
///
/// Callers only pass non-negative values; the right operand contributes at
/// least one digit.
#[must_use]
pub fn join_digits(left: i64, right: i64) -> i64 {
    let mut shift = 10;
    while shift <= right {
        shift *= 10;
    }
    left * shift + right
}

impl Pattern {
    /// The full catalog in id order (ids 1..=50, contiguous).
    #[must_use]
    pub const fn all() -> &'static [Pattern] {
        PATTERNS
    }

    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Short formula text, e.g. `"a^2 + b"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Longer hint for rules whose formula does not read naturally.
    #[must_use]
    pub const fn describe(&self) -> Option<&'static str> {
        self.describe
    }

    /// Apply the rule to one operand pair.
    #[must_use]
    pub fn apply(&self, a: i64, b: i64) -> i64 {
        (self.compute)(a, b)
    }

    /// Explanation sentence for a solved question pair.
    #[must_use]
    pub fn explain(&self, a: i64, b: i64, result: i64) -> String {
        match self.describe {
            Some(hint) => format!(
                "Pattern #{id}: {label} ({hint}). With a = {a} and b = {b}, the rule gives {result}.",
                id = self.id,
                label = self.label,
            ),
            None => format!(
                "Pattern #{id}: {label}. With a = {a} and b = {b}, the rule gives {result}.",
                id = self.id,
                label = self.label,
            ),
        }
    }
}

const PATTERNS: &[Pattern] = &[
    Pattern { id: 1, label: "(a + b) * 2", describe: None, compute: |a, b| (a + b) * 2 },
    Pattern { id: 2, label: "(a + b) * 3", describe: None, compute: |a, b| (a + b) * 3 },
    Pattern { id: 3, label: "(a + b) * 4", describe: None, compute: |a, b| (a + b) * 4 },
    Pattern { id: 4, label: "(a + b) + a*b", describe: None, compute: |a, b| (a + b) + a * b },
    Pattern { id: 5, label: "a*b + 5", describe: None, compute: |a, b| a * b + 5 },
    Pattern { id: 6, label: "a*b - (a + b)", describe: None, compute: |a, b| a * b - (a + b) },
    Pattern { id: 7, label: "a^2 + b", describe: None, compute: |a, b| a * a + b },
    Pattern { id: 8, label: "b^2 + a", describe: None, compute: |a, b| b * b + a },
    Pattern { id: 9, label: "a^2 + b^2", describe: None, compute: |a, b| a * a + b * b },
    Pattern { id: 10, label: "(a + b)^2", describe: None, compute: |a, b| (a + b) * (a + b) },
    Pattern {
        id: 11,
        label: "2 * |a - b|",
        describe: Some("twice the absolute difference"),
        compute: |a, b| 2 * (a - b).abs(),
    },
    Pattern {
        id: 12,
        label: "3 * |a - b|",
        describe: Some("three times the absolute difference"),
        compute: |a, b| 3 * (a - b).abs(),
    },
    Pattern { id: 13, label: "10*a + b", describe: None, compute: |a, b| a * 10 + b },
    Pattern { id: 14, label: "10*b + a", describe: None, compute: |a, b| b * 10 + a },
    Pattern { id: 15, label: "5*a + 3*b", describe: None, compute: |a, b| 5 * a + 3 * b },
    Pattern { id: 16, label: "3*a + 5*b", describe: None, compute: |a, b| 3 * a + 5 * b },
    Pattern { id: 17, label: "(a + 1)*(b + 1)", describe: None, compute: |a, b| (a + 1) * (b + 1) },
    Pattern { id: 18, label: "(a + 2)*b", describe: None, compute: |a, b| (a + 2) * b },
    Pattern { id: 19, label: "a*b + (a - b)", describe: None, compute: |a, b| a * b + (a - b) },
    Pattern { id: 20, label: "a*b - (a - b)", describe: None, compute: |a, b| a * b - (a - b) },
    Pattern { id: 21, label: "a*b + 2*(a + b)", describe: None, compute: |a, b| a * b + 2 * (a + b) },
    Pattern { id: 22, label: "a*b - 2*(a + b)", describe: None, compute: |a, b| a * b - 2 * (a + b) },
    Pattern { id: 23, label: "a*b + a", describe: None, compute: |a, b| a * b + a },
    Pattern { id: 24, label: "a*b + b", describe: None, compute: |a, b| a * b + b },
    Pattern { id: 25, label: "a^2 * b", describe: None, compute: |a, b| a * a * b },
    Pattern { id: 26, label: "a * b^2", describe: None, compute: |a, b| a * b * b },
    Pattern { id: 27, label: "(a + b)*a", describe: None, compute: |a, b| (a + b) * a },
    Pattern { id: 28, label: "(a + b)*b", describe: None, compute: |a, b| (a + b) * b },
    Pattern {
        id: 29,
        label: "digits ab",
        describe: Some("the digits of a and b written side by side"),
        compute: |a, b| join_digits(a, b),
    },
    Pattern {
        id: 30,
        label: "digits ba",
        describe: Some("the digits of b and a written side by side"),
        compute: |a, b| join_digits(b, a),
    },
    Pattern {
        id: 31,
        label: "ab + (a + b)",
        describe: Some("digits of a and b side by side, plus the sum"),
        compute: |a, b| join_digits(a, b) + (a + b),
    },
    Pattern {
        id: 32,
        label: "ab - (a + b)",
        describe: Some("digits of a and b side by side, minus the sum"),
        compute: |a, b| join_digits(a, b) - (a + b),
    },
    Pattern {
        id: 33,
        label: "(a + b) then a*b",
        describe: Some("digits of the sum followed by digits of the product"),
        compute: |a, b| join_digits(a + b, a * b),
    },
    Pattern {
        id: 34,
        label: "a*b then (a + b)",
        describe: Some("digits of the product followed by digits of the sum"),
        compute: |a, b| join_digits(a * b, a + b),
    },
    Pattern {
        id: 35,
        label: "10*max + min",
        describe: Some("ten times the larger value plus the smaller"),
        compute: |a, b| 10 * a.max(b) + a.min(b),
    },
    Pattern {
        id: 36,
        label: "max^2 + min",
        describe: Some("the larger value squared plus the smaller"),
        compute: |a, b| a.max(b) * a.max(b) + a.min(b),
    },
    Pattern {
        id: 37,
        label: "2*(max + min)",
        describe: Some("twice the sum of the larger and smaller values"),
        compute: |a, b| 2 * (a.max(b) + a.min(b)),
    },
    Pattern {
        id: 38,
        label: "5*(max - min)",
        describe: Some("five times the gap between the values"),
        compute: |a, b| 5 * (a.max(b) - a.min(b)),
    },
    Pattern {
        id: 39,
        label: "(a + b) + |a - b|",
        describe: Some("the sum plus the absolute difference"),
        compute: |a, b| (a + b) + (a - b).abs(),
    },
    Pattern { id: 40, label: "(a + b) + a*b", describe: None, compute: |a, b| (a + b) + a * b },
    Pattern { id: 41, label: "2*a*b - (a + b)", describe: None, compute: |a, b| 2 * a * b - (a + b) },
    Pattern { id: 42, label: "2*(a + b) + a*b", describe: None, compute: |a, b| 2 * (a + b) + a * b },
    Pattern { id: 43, label: "a^3 + b", describe: None, compute: |a, b| a * a * a + b },
    Pattern { id: 44, label: "b^3 + a", describe: None, compute: |a, b| b * b * b + a },
    Pattern {
        id: 45,
        label: "(a + b)*|a - b|",
        describe: Some("the sum times the absolute difference"),
        compute: |a, b| (a + b) * (a - b).abs(),
    },
    Pattern {
        id: 46,
        label: "max^2 - min^2",
        describe: Some("larger value squared minus smaller value squared"),
        compute: |a, b| a.max(b) * a.max(b) - a.min(b) * a.min(b),
    },
    Pattern {
        id: 47,
        label: "floor(a*b / 2)",
        describe: Some("half the product, rounded down"),
        compute: |a, b| a * b / 2,
    },
    Pattern {
        id: 48,
        label: "3*min + 2*max",
        describe: Some("three times the smaller plus twice the larger"),
        compute: |a, b| 3 * a.min(b) + 2 * a.max(b),
    },
    Pattern {
        id: 49,
        label: "(a + b) + min^2",
        describe: Some("the sum plus the smaller value squared"),
        compute: |a, b| (a + b) + a.min(b) * a.min(b),
    },
    Pattern {
        id: 50,
        label: "a*b + max^2",
        describe: Some("the product plus the larger value squared"),
        compute: |a, b| a * b + a.max(b) * a.max(b),
    },
];
