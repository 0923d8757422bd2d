//! Conditional grouping engine.

use std::collections::HashMap;
use std::hash::Hash;

use super::types::Group;

/// A selector slot: set slots map an element to one key component.
type Selector<T, K> = Box<dyn Fn(&T) -> K>;

/// Engine for grouping elements by a variable number of optional key
/// selectors.
///
/// Slots are declared in order with [`with_selector`] (set) or
/// [`with_unset_slot`] (unset). A grouping call applies only the set
/// slots, in declaration order, to build each element's composite key;
/// unset slots contribute nothing, so the key length always equals the
/// number of set slots. With no set slot at all, every element lands in
/// a single group with an empty key.
///
/// Grouping is stable twice over: groups appear in first-key-occurrence
/// order, and members keep their original relative order.
///
/// Key components share one type `K`. Selectors with logically different
/// output types are expressed with a caller-side enum over those types,
/// which keeps key comparison component-wise and hashable.
///
/// [`with_selector`]: ConditionalGrouper::with_selector
/// [`with_unset_slot`]: ConditionalGrouper::with_unset_slot
///
/// # Examples
///
/// ```
/// use u_seqkit::grouping::ConditionalGrouper;
///
/// let words = ["apple", "avocado", "banana", "blueberry"];
///
/// // Slot 1 unset, slot 2 groups by first letter.
/// let grouper = ConditionalGrouper::new()
///     .with_unset_slot()
///     .with_selector(|word: &&str| word.chars().next().unwrap());
///
/// let groups = grouper.group(&words);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key, vec!['a']);
/// assert_eq!(groups[0].items, vec!["apple", "avocado"]);
/// assert_eq!(groups[1].key, vec!['b']);
/// ```
pub struct ConditionalGrouper<T, K> {
    slots: Vec<Option<Selector<T, K>>>,
}

impl<T, K> ConditionalGrouper<T, K> {
    /// Creates an engine with no slots.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends a set selector slot.
    pub fn with_selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&T) -> K + 'static,
    {
        self.slots.push(Some(Box::new(selector)));
        self
    }

    /// Appends an unset slot. It keeps its position in the slot order
    /// but contributes no key component.
    pub fn with_unset_slot(mut self) -> Self {
        self.slots.push(None);
        self
    }

    /// Total number of declared slots, set or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of set slots, which is also the key length of every group
    /// this engine produces.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<T, K> ConditionalGrouper<T, K>
where
    K: Clone + Eq + Hash,
{
    /// Groups `values` and returns each group's key together with the
    /// indices of its members.
    ///
    /// Groups are ordered by first key occurrence; indices within a
    /// group are increasing, preserving original element order.
    pub fn group_indices(&self, values: &[T]) -> Vec<(Vec<K>, Vec<usize>)> {
        let active: Vec<&Selector<T, K>> = self.slots.iter().flatten().collect();
        if active.is_empty() {
            return vec![(Vec::new(), (0..values.len()).collect())];
        }

        let mut groups: Vec<(Vec<K>, Vec<usize>)> = Vec::new();
        let mut index: HashMap<Vec<K>, usize> = HashMap::new();
        for (i, value) in values.iter().enumerate() {
            let key: Vec<K> = active.iter().map(|selector| selector(value)).collect();
            match index.get(&key) {
                Some(&at) => groups[at].1.push(i),
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push((key, vec![i]));
                }
            }
        }
        groups
    }

    /// Groups `values` into owned [`Group`]s, cloning the members.
    pub fn group(&self, values: &[T]) -> Vec<Group<T, K>>
    where
        T: Clone,
    {
        self.group_indices(values)
            .into_iter()
            .map(|(key, indices)| Group {
                key,
                items: indices.into_iter().map(|i| values[i].clone()).collect(),
            })
            .collect()
    }
}

impl<T, K> Default for ConditionalGrouper<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
