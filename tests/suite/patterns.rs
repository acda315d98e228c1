//! Catalog-wide properties the display layer depends on.

use riddlecast_types::Pattern;

/// Every rule over the full operand grid stays within the widths the puzzle
/// card renders without wrapping.
#[test]
fn results_fit_the_puzzle_card() {
    for pattern in Pattern::all() {
        for a in 1..=9 {
            for b in 1..=9 {
                let result = pattern.apply(a, b);
                assert!(
                    (-99..=9999).contains(&result),
                    "pattern #{} on ({a}, {b}) produced {result}",
                    pattern.id()
                );
            }
        }
    }
}

/// The answer card prints `Logic: {label}`; labels must stay terse enough
/// for a narrow terminal.
#[test]
fn labels_stay_terse() {
    for pattern in Pattern::all() {
        assert!(
            pattern.label().len() <= 24,
            "pattern #{} label is {} chars",
            pattern.id(),
            pattern.label().len()
        );
    }
}

/// Split view shows the full explanation sentence; every rule must produce
/// one that names the rule and the computed result.
#[test]
fn every_rule_explains_its_answer() {
    for pattern in Pattern::all() {
        let result = pattern.apply(4, 7);
        let text = pattern.explain(4, 7, result);
        assert!(text.contains(pattern.label()), "pattern #{}", pattern.id());
        assert!(text.contains("a = 4"), "pattern #{}", pattern.id());
        assert!(
            text.contains(&format!("gives {result}")),
            "pattern #{}",
            pattern.id()
        );
    }
}
