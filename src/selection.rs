use std::collections::BTreeSet;

use crate::data::model::Candidate;

// ---------------------------------------------------------------------------
// Selection set
// ---------------------------------------------------------------------------

/// Candidate ids marked for bulk actions.
///
/// Independent of paging and filtering: ids stay selected when their
/// candidate scrolls off-page or drops out of the filtered view, and only
/// `select_all_filtered` / `deselect_all` replace the set wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Replace the selection with exactly these ids.
    pub fn select_all_filtered<'a>(&mut self, filtered: impl IntoIterator<Item = &'a Candidate>) {
        self.ids = filtered.into_iter().map(|c| c.id.clone()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected candidates among `filtered`, in `filtered` order. Selected ids
    /// that are not in `filtered` are skipped but stay selected.
    pub fn selected_list<'a>(
        &self,
        filtered: impl IntoIterator<Item = &'a Candidate>,
    ) -> Vec<&'a Candidate> {
        filtered
            .into_iter()
            .filter(|c| self.ids.contains(&c.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cands(ids: &[&str]) -> Vec<Candidate> {
        ids.iter()
            .map(|id| Candidate {
                id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn ids(list: &[&Candidate]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn toggle_flips_membership() {
        let mut s = Selection::default();
        s.toggle("a");
        assert!(s.is_selected("a"));
        s.toggle("a");
        assert!(!s.is_selected("a"));
        assert!(s.is_empty());
    }

    #[test]
    fn select_all_filtered_replaces() {
        let all = cands(&["a", "b", "c"]);
        let mut s = Selection::default();
        s.toggle("z");
        s.select_all_filtered(&all[..2]);
        assert_eq!(s.len(), 2);
        assert!(!s.is_selected("z"));
        assert!(s.is_selected("a") && s.is_selected("b"));
        s.deselect_all();
        assert!(s.is_empty());
    }

    #[test]
    fn read_out_is_relative_to_filtered_view() {
        let all = cands(&["a", "b", "c"]);
        let mut s = Selection::default();
        s.toggle("c");
        s.toggle("a");
        assert_eq!(ids(&s.selected_list(&all)), vec!["a", "c"]);

        // "c" filtered out: hidden from the read-out but still selected
        assert_eq!(ids(&s.selected_list(&all[..2])), vec!["a"]);
        assert!(s.is_selected("c"));
        assert_eq!(ids(&s.selected_list(&all)), vec!["a", "c"]);
    }
}
