//! Puzzle value objects: one generated round of worked lines and a question.

use crate::pattern::Pattern;

/// One operand pair and its computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedPair {
    a: i64,
    b: i64,
    result: i64,
}

impl WorkedPair {
    #[must_use]
    pub const fn new(a: i64, b: i64, result: i64) -> Self {
        Self { a, b, result }
    }

    #[must_use]
    pub const fn a(&self) -> i64 {
        self.a
    }

    #[must_use]
    pub const fn b(&self) -> i64 {
        self.b
    }

    #[must_use]
    pub const fn result(&self) -> i64 {
        self.result
    }

    /// `"a + b = result"`.
    #[must_use]
    pub fn worked_line(&self) -> String {
        format!("{} + {} = {}", self.a, self.b, self.result)
    }

    /// `"a + b = ?"`.
    #[must_use]
    pub fn question_line(&self) -> String {
        format!("{} + {} = ?", self.a, self.b)
    }
}

/// One round's riddle: worked examples, the question pair, and the answer
/// text. Created fresh per round, read-only afterward, superseded by the
/// next round's puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pattern_id: u8,
    logic: &'static str,
    examples: Vec<WorkedPair>,
    question: WorkedPair,
    explanation: String,
}

impl Puzzle {
    #[must_use]
    pub fn new(pattern: &Pattern, examples: Vec<WorkedPair>, question: WorkedPair) -> Self {
        let explanation = pattern.explain(question.a(), question.b(), question.result());
        Self {
            pattern_id: pattern.id(),
            logic: pattern.label(),
            examples,
            question,
            explanation,
        }
    }

    #[must_use]
    pub const fn pattern_id(&self) -> u8 {
        self.pattern_id
    }

    /// Short formula text for the answer card's "Logic:" line.
    #[must_use]
    pub const fn logic(&self) -> &'static str {
        self.logic
    }

    #[must_use]
    pub fn examples(&self) -> &[WorkedPair] {
        &self.examples
    }

    #[must_use]
    pub const fn question(&self) -> WorkedPair {
        self.question
    }

    #[must_use]
    pub const fn answer_value(&self) -> i64 {
        self.question.result()
    }

    /// Full interpolated explanation sentence for the question pair.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Display lines for the puzzle card. The last line is always the
    /// question pair, masked with `?` until revealed.
    #[must_use]
    pub fn board_lines(&self, revealed: bool) -> Vec<String> {
        let mut lines: Vec<String> = self.examples.iter().map(WorkedPair::worked_line).collect();
        if revealed {
            lines.push(self.question.worked_line());
        } else {
            lines.push(self.question.question_line());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_puzzle() -> Puzzle {
        let pattern = &Pattern::all()[6]; // #7: a^2 + b
        let examples = vec![
            WorkedPair::new(2, 5, pattern.apply(2, 5)),
            WorkedPair::new(1, 8, pattern.apply(1, 8)),
        ];
        let question = WorkedPair::new(3, 4, pattern.apply(3, 4));
        Puzzle::new(pattern, examples, question)
    }

    #[test]
    fn line_formats_match_the_board_text() {
        let pair = WorkedPair::new(3, 4, 13);
        assert_eq!(pair.worked_line(), "3 + 4 = 13");
        assert_eq!(pair.question_line(), "3 + 4 = ?");
    }

    #[test]
    fn board_lines_mask_the_question_until_revealed() {
        let puzzle = sample_puzzle();

        let hidden = puzzle.board_lines(false);
        assert_eq!(hidden.len(), 3);
        assert_eq!(hidden[0], "2 + 5 = 9");
        assert_eq!(hidden[1], "1 + 8 = 9");
        assert_eq!(hidden[2], "3 + 4 = ?");

        let shown = puzzle.board_lines(true);
        assert_eq!(shown[2], "3 + 4 = 13");
    }

    #[test]
    fn answer_fields_come_from_the_question_pair() {
        let puzzle = sample_puzzle();
        assert_eq!(puzzle.pattern_id(), 7);
        assert_eq!(puzzle.answer_value(), 13);
        assert_eq!(puzzle.logic(), "a^2 + b");
        assert!(puzzle.explanation().contains("a = 3"));
        assert!(puzzle.explanation().contains("gives 13"));
    }
}
