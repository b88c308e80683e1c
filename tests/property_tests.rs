use proptest::prelude::*;

use just_expand::expansion::count_expansions;
use just_expand::{
    evaluate, parse_word, resolve_tilde, BraceNode, HomeDirectories, WordNode, WordPart,
};

fn render(words: &[WordNode]) -> Vec<String> {
    words.iter().map(WordNode::to_string).collect()
}

proptest! {
    /// Text without brace syntax expands to exactly itself.
    #[test]
    fn brace_free_text_round_trips(text in "[a-z0-9/_.~=:-]*") {
        prop_assert_eq!(render(&evaluate(&parse_word(&text))), vec![text]);
    }

    /// A span that is neither alternation nor range stays the same literal
    /// when parsed again.
    #[test]
    fn literal_fallback_is_idempotent(inner in "[a-z ]*", prefix in "[a-z]*") {
        let text = format!("{}{{{}}}", prefix, inner);
        let first = parse_word(&text);
        prop_assert!(first.parts.iter().any(|p| matches!(p, WordPart::Brace(BraceNode::Literal(_)))));
        let rendered = first.to_string();
        prop_assert_eq!(&rendered, &text);
        prop_assert_eq!(parse_word(&rendered), first);
    }

    /// Two sibling alternations of sizes m and n give m*n words with the
    /// left alternation varying slowest.
    #[test]
    fn cartesian_order(
        left in prop::collection::vec("[a-z]{1,3}", 2..5),
        right in prop::collection::vec("[A-Z]{1,3}", 2..5),
    ) {
        let text = format!("{{{}}}-{{{}}}", left.join(","), right.join(","));
        let words = render(&evaluate(&parse_word(&text)));
        prop_assert_eq!(words.len(), left.len() * right.len());
        for (i, l) in left.iter().enumerate() {
            for (j, r) in right.iter().enumerate() {
                prop_assert_eq!(&words[i * right.len() + j], &format!("{}-{}", l, r));
            }
        }
    }

    /// Parsing never panics and the precomputed count matches evaluation.
    #[test]
    fn parse_is_total(s in "\\PC{0,40}") {
        let word = parse_word(&s);
        let count = count_expansions(&word);
        prop_assume!(count <= 10_000);
        let words = evaluate(&word);
        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.len() as u128, count);
    }

    /// Tilde resolution leaves substitution atoms byte-for-byte intact.
    #[test]
    fn tilde_never_touches_atoms(name in "[A-Z]{1,6}", tail in "[a-z/~]{0,6}") {
        let homes = HomeDirectories::new("/home/bob");
        for text in [format!("${}{}", name, tail), format!("~/${}{}", name, tail)] {
            for word in evaluate(&parse_word(&text)) {
                let before: Vec<&WordPart> = word
                    .parts
                    .iter()
                    .filter(|p| matches!(p, WordPart::Substitution(_)))
                    .collect();
                let resolved = resolve_tilde(&word, true, &homes);
                let after: Vec<&WordPart> = resolved
                    .parts
                    .iter()
                    .filter(|p| matches!(p, WordPart::Substitution(_)))
                    .collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
