//! Property tests for agreement computation.
//!
//! Invariants that must hold for any pair of corpora over the same ids.

use concord::{compute_agreement, Corpus, Error, MissingIdPolicy, SentimentLabel};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = SentimentLabel> {
    prop::sample::select(SentimentLabel::ALL.to_vec())
}

/// Two label columns of equal length over ids `0..n`.
fn paired_labels() -> impl Strategy<Value = Vec<(SentimentLabel, SentimentLabel)>> {
    prop::collection::vec((label(), label()), 1..200)
}

fn build(pairs: &[(SentimentLabel, SentimentLabel)]) -> (Corpus, Corpus) {
    let a = Corpus::from_pairs(
        "a",
        pairs.iter().enumerate().map(|(i, (l, _))| (i.to_string(), l.as_str())),
    );
    let b = Corpus::from_pairs(
        "b",
        pairs.iter().enumerate().map(|(i, (_, l))| (i.to_string(), l.as_str())),
    );
    (a, b)
}

fn to_text(corpus: &Corpus, order: &[usize]) -> String {
    let records: Vec<(&str, &str)> = corpus.iter().collect();
    order
        .iter()
        .map(|&i| format!("{},{},tweet text\n", records[i].0, records[i].1))
        .collect()
}

proptest! {
    #[test]
    fn test_matrix_sums_to_compared(pairs in paired_labels()) {
        let (a, b) = build(&pairs);
        match compute_agreement(&a, &b, MissingIdPolicy::Fail) {
            Ok(r) => {
                prop_assert_eq!(r.matrix.total(), r.compared);
                prop_assert_eq!(r.compared, pairs.len());
                prop_assert!(r.agreement_count <= r.compared);
                prop_assert!(r.p0 >= 0.0 && r.p0 <= 1.0);
                prop_assert!(r.pe >= 0.0 && r.pe < 1.0);
                prop_assert!(r.kappa <= 1.0 + 1e-12);
            }
            // Only possible when both annotators used a single label throughout
            Err(Error::Arithmetic(_)) => {
                let first = pairs[0];
                prop_assert!(pairs.iter().all(|&p| p == first && p.0 == p.1));
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn test_identical_corpora_have_kappa_one(
        labels in prop::collection::vec(label(), 2..200)
    ) {
        prop_assume!(labels.iter().any(|&l| l != labels[0]));
        let pairs: Vec<_> = labels.iter().map(|&l| (l, l)).collect();
        let (a, b) = build(&pairs);

        let r = compute_agreement(&a, &b, MissingIdPolicy::Fail).unwrap();
        prop_assert_eq!(r.agreement_count, labels.len());
        prop_assert_eq!(r.p0, 1.0);
        prop_assert_eq!(r.kappa, 1.0);
    }

    #[test]
    fn test_never_matching_has_zero_agreement(pairs in paired_labels()) {
        let pairs: Vec<_> = pairs.into_iter().filter(|(x, y)| x != y).collect();
        prop_assume!(!pairs.is_empty());
        let (a, b) = build(&pairs);

        let r = compute_agreement(&a, &b, MissingIdPolicy::Fail).unwrap();
        prop_assert_eq!(r.agreement_count, 0);
        prop_assert_eq!(r.p0, 0.0);
    }

    #[test]
    fn test_line_order_does_not_matter(
        pairs in paired_labels(),
        seed in any::<u64>(),
    ) {
        let (a, b) = build(&pairs);
        let baseline = compute_agreement(&a, &b, MissingIdPolicy::Fail);

        // Deterministic permutation of record order
        let n = a.len();
        let mut order: Vec<usize> = (0..n).collect();
        let mut state = seed;
        for i in (1..n).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            order.swap(i, (state >> 33) as usize % (i + 1));
        }

        let a2 = Corpus::parse(&to_text(&a, &order), "a").unwrap();
        let b2 = Corpus::parse(&to_text(&b, &order), "b").unwrap();
        let shuffled = compute_agreement(&a2, &b2, MissingIdPolicy::Fail);

        match (baseline, shuffled) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
            (Err(_), Err(_)) => {}
            (x, y) => prop_assert!(false, "results diverged: {:?} vs {:?}", x, y),
        }
    }

    #[test]
    fn test_skip_policy_counts_missing(
        pairs in paired_labels(),
        drop_every in 2usize..5,
    ) {
        let (a, full_b) = build(&pairs);
        let b = Corpus::from_pairs(
            "b",
            full_b
                .iter()
                .enumerate()
                .filter(|(i, _)| i % drop_every != 0)
                .map(|(_, (id, l))| (id.to_string(), l.to_string())),
        );
        let missing = a.len() - b.len();

        prop_assert!(compute_agreement(&a, &b, MissingIdPolicy::Fail)
            .map_err(|e| e.is_lookup())
            .unwrap_err());

        match compute_agreement(&a, &b, MissingIdPolicy::Skip) {
            Ok(r) => {
                prop_assert_eq!(r.skipped_ids.len(), missing);
                prop_assert_eq!(r.compared + missing, a.len());
            }
            Err(e) => prop_assert!(matches!(e, Error::Arithmetic(_))),
        }
    }
}
