//! Ordered Element List
//!
//! # Invariants
//! - Element ids are unique within the list
//! - Order is significant and only changes through `move_to`, `append`
//!   and `remove`
//! - Every operation leaves a valid permutation behind, so a UI can
//!   re-render after each intermediate drag step

use std::collections::HashSet;

use crate::domain::value_objects::{ElementId, ElementLabel, FormElement};
use crate::error::{FormsError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementList {
    elements: Vec<FormElement>,
    /// `None` once the id space is used up
    next_id: Option<i64>,
}

impl Default for ElementList {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementList {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Rebuild a list from stored elements, keeping their order.
    ///
    /// The id counter resumes after the largest existing id. A list holding
    /// `i64::MAX` loads fine but cannot take new elements.
    pub fn from_elements(elements: Vec<FormElement>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.id) {
                return Err(FormsError::validation(format!(
                    "duplicate element id {}",
                    element.id
                )));
            }
        }

        let next_id = elements
            .iter()
            .map(|e| e.id.value())
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
            .map(|next| next.max(1));

        Ok(Self { elements, next_id })
    }

    /// Append a new element with a fresh id
    pub fn append(&mut self, label: ElementLabel) -> Result<FormElement> {
        let id = self
            .next_id
            .ok_or_else(|| FormsError::validation("no element ids left in this form"))?;
        let element = FormElement::new(id, label);
        self.next_id = id.checked_add(1);
        self.elements.push(element);
        Ok(element)
    }

    /// Remove the element with `id`. Absent ids leave the list untouched.
    pub fn remove(&mut self, id: ElementId) -> Option<FormElement> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    /// Relocate the element at `from` to `to`, shifting the elements in
    /// between by one. This is an array-move, not a swap.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }

        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FormElement> {
        self.elements.get(index)
    }

    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormElement> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[FormElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<FormElement> {
        self.elements
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(FormsError::OutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a FormElement;
    type IntoIter = std::slice::Iter<'a, FormElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(list: &ElementList) -> Vec<ElementLabel> {
        list.iter().map(|e| e.label).collect()
    }

    fn abc() -> ElementList {
        let mut list = ElementList::new();
        list.append(ElementLabel::TextField).unwrap();
        list.append(ElementLabel::Email).unwrap();
        list.append(ElementLabel::Dropdown).unwrap();
        list
    }

    #[test]
    fn test_append_assigns_fresh_ids() {
        let mut list = ElementList::new();
        let a = list.append(ElementLabel::TextField).unwrap();
        let b = list.append(ElementLabel::TextField).unwrap();

        assert_eq!(list.len(), 2);
        assert_ne!(a.id, b.id);
        assert_eq!(list.get(1), Some(&b));
    }

    #[test]
    fn test_move_last_to_front() {
        let mut list = abc();
        list.move_to(2, 0).unwrap();
        assert_eq!(
            labels(&list),
            vec![ElementLabel::Dropdown, ElementLabel::TextField, ElementLabel::Email]
        );
    }

    #[test]
    fn test_move_is_not_a_swap() {
        let mut list = abc();
        list.move_to(0, 2).unwrap();
        assert_eq!(
            labels(&list),
            vec![ElementLabel::Email, ElementLabel::Dropdown, ElementLabel::TextField]
        );
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut list = abc();
        let before = list.clone();
        list.move_to(1, 1).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut list = abc();
        assert_eq!(
            list.move_to(3, 0),
            Err(FormsError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.move_to(0, 5),
            Err(FormsError::OutOfRange { index: 5, len: 3 })
        );
        assert!(ElementList::new().move_to(0, 0).is_err());
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut list = abc();
        let middle = list.get(1).copied().unwrap();

        assert_eq!(list.remove(middle.id), Some(middle));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(middle.id));

        let before = list.clone();
        assert_eq!(list.remove(ElementId::new(999)), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_from_elements_resumes_counter() {
        let list = ElementList::from_elements(vec![
            FormElement::new(40, ElementLabel::Email),
            FormElement::new(7, ElementLabel::Checkbox),
        ])
        .unwrap();

        let mut list = list;
        let fresh = list.append(ElementLabel::DatePicker).unwrap();
        assert_eq!(fresh.id, ElementId::new(41));
    }

    #[test]
    fn test_append_after_max_id_fails_without_reuse() {
        let mut list =
            ElementList::from_elements(vec![FormElement::new(i64::MAX, ElementLabel::Email)]).unwrap();
        let before = list.clone();

        assert!(matches!(
            list.append(ElementLabel::TextField),
            Err(FormsError::Validation(_))
        ));
        assert_eq!(list, before);
        list.move_to(0, 0).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_counter_exhausted_by_last_append() {
        let mut list =
            ElementList::from_elements(vec![FormElement::new(i64::MAX - 1, ElementLabel::Email)]).unwrap();

        let last = list.append(ElementLabel::Checkbox).unwrap();
        assert_eq!(last.id, ElementId::new(i64::MAX));
        assert!(list.append(ElementLabel::Checkbox).is_err());

        let ids: HashSet<_> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_from_elements_rejects_duplicates() {
        let result = ElementList::from_elements(vec![
            FormElement::new(1, ElementLabel::Email),
            FormElement::new(1, ElementLabel::Checkbox),
        ]);
        assert!(matches!(result, Err(FormsError::Validation(_))));
    }

    fn arb_list() -> impl Strategy<Value = ElementList> {
        prop::collection::vec(0usize..5, 1..12).prop_map(|picks| {
            let mut list = ElementList::new();
            for pick in picks {
                list.append(ElementLabel::ALL[pick]).unwrap();
            }
            list
        })
    }

    proptest! {
        #[test]
        fn prop_move_then_move_back_restores(list in arb_list(), a in 0usize..12, b in 0usize..12) {
            let len = list.len();
            let (from, to) = (a % len, b % len);
            let mut moved = list.clone();
            moved.move_to(from, to).unwrap();
            moved.move_to(to, from).unwrap();
            prop_assert_eq!(moved, list);
        }

        #[test]
        fn prop_move_preserves_elements(list in arb_list(), a in 0usize..12, b in 0usize..12) {
            let len = list.len();
            let mut moved = list.clone();
            moved.move_to(a % len, b % len).unwrap();

            let mut before: Vec<_> = list.iter().map(|e| e.id).collect();
            let mut after: Vec<_> = moved.iter().map(|e| e.id).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_append_grows_by_one_with_unique_id(list in arb_list(), pick in 0usize..5) {
            let mut list = list;
            let len = list.len();
            let existing: HashSet<_> = list.iter().map(|e| e.id).collect();

            let element = list.append(ElementLabel::ALL[pick]).unwrap();
            prop_assert_eq!(list.len(), len + 1);
            prop_assert!(!existing.contains(&element.id));
        }
    }
}
