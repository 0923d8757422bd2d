//! Grouping output types.

/// One output group: a composite key paired with the members sharing it.
///
/// The key holds one component per *active* selector of the grouping
/// call, in slot order. Its length therefore varies call by call and
/// never reflects unset slots; a call with no active selector at all
/// produces a single group with an empty key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group<T, K> {
    /// Composite key components, in selector slot order.
    pub key: Vec<K>,
    /// Members sharing the key, in original relative order.
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_equality_is_structural() {
        let a = Group {
            key: vec!["x"],
            items: vec![1, 2],
        };
        let b = Group {
            key: vec!["x"],
            items: vec![1, 2],
        };
        assert_eq!(a, b);
    }
}
