//! Puzzle generation: one pattern, a few worked pairs, one question.

use rand::Rng;

use riddlecast_types::{Pattern, Puzzle, WorkedPair};

/// Inclusive operand range for every drawn pair.
pub const OPERAND_MIN: i64 = 1;
pub const OPERAND_MAX: i64 = 9;

/// Generate one round's puzzle: a uniformly chosen pattern,
/// `example_count` worked pairs, and one question pair.
pub fn generate(rng: &mut impl Rng, example_count: usize) -> Puzzle {
    let patterns = Pattern::all();
    let pattern = &patterns[rng.random_range(0..patterns.len())];

    let examples = (0..example_count)
        .map(|_| draw_pair(rng, pattern))
        .collect();
    let question = draw_pair(rng, pattern);

    Puzzle::new(pattern, examples, question)
}

fn draw_pair(rng: &mut impl Rng, pattern: &Pattern) -> WorkedPair {
    let a = rng.random_range(OPERAND_MIN..=OPERAND_MAX);
    let b = rng.random_range(OPERAND_MIN..=OPERAND_MAX);
    WorkedPair::new(a, b, pattern.apply(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_results_match_the_source_pattern() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let puzzle = generate(&mut rng, 3);
            let pattern = &Pattern::all()[usize::from(puzzle.pattern_id()) - 1];
            assert_eq!(pattern.id(), puzzle.pattern_id());

            let question = puzzle.question();
            assert_eq!(pattern.apply(question.a(), question.b()), puzzle.answer_value());
            for example in puzzle.examples() {
                assert_eq!(pattern.apply(example.a(), example.b()), example.result());
            }
        }
    }

    #[test]
    fn operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let puzzle = generate(&mut rng, 1);
            let question = puzzle.question();
            let mut pairs = vec![(question.a(), question.b())];
            pairs.extend(puzzle.examples().iter().map(|pair| (pair.a(), pair.b())));
            for (a, b) in pairs {
                assert!((OPERAND_MIN..=OPERAND_MAX).contains(&a));
                assert!((OPERAND_MIN..=OPERAND_MAX).contains(&b));
            }
        }
    }

    #[test]
    fn example_count_is_honored() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate(&mut rng, 3).examples().len(), 3);
        assert_eq!(generate(&mut rng, 1).examples().len(), 1);
    }

    #[test]
    fn pattern_choice_spans_the_catalog() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generate(&mut rng, 1).pattern_id());
        }
        assert!(seen.len() > 25, "only {} distinct patterns drawn", seen.len());
    }
}
