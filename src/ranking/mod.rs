use crate::core::{NormalizedName, RankedSequence};

/// Sort normalized names ascending by byte order.
///
/// Duplicates are kept. The empty name sorts before every other name.
pub fn rank(names: Vec<NormalizedName>) -> RankedSequence {
    let mut names = names;
    // Equal names are identical, relative order among them is irrelevant
    names.sort_unstable();
    RankedSequence::from_sorted(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_names;

    fn names(values: &[&str]) -> Vec<NormalizedName> {
        values.iter().map(|v| NormalizedName::parse(v).unwrap()).collect()
    }

    fn as_strs(ranked: &RankedSequence) -> Vec<&str> {
        ranked.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_rank_alphabetical() {
        let ranked = rank(names(&["COLIN", "AMY", "BOB"]));
        assert_eq!(as_strs(&ranked), vec!["AMY", "BOB", "COLIN"]);
    }

    #[test]
    fn test_empty_name_sorts_first() {
        let ranked = rank(names(&["A", "", "B", ""]));
        assert_eq!(as_strs(&ranked), vec!["", "", "A", "B"]);
    }

    #[test]
    fn test_prefix_sorts_before_longer_name() {
        let ranked = rank(names(&["ANNA", "ANN", "AN"]));
        assert_eq!(as_strs(&ranked), vec!["AN", "ANN", "ANNA"]);
    }

    #[test]
    fn test_duplicates_retained() {
        let ranked = rank(names(&["AA", "B", "AA"]));
        assert_eq!(as_strs(&ranked), vec!["AA", "AA", "B"]);
    }

    #[test]
    fn test_rank_is_sorted_permutation() {
        let input = normalize_names(&["mary", "PATRICIA", "linda", "barbara", "", "Elizabeth", "mary"]);
        let ranked = rank(input.clone());

        assert_eq!(ranked.len(), input.len());
        assert!(ranked.as_slice().windows(2).all(|w| w[0] <= w[1]));

        let mut expected = input;
        expected.sort();
        assert_eq!(ranked.into_inner(), expected);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
