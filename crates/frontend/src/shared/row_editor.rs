//! Row-by-row editor for the limit and feature collections of a tier.
//!
//! Rows arrive from the server clean, become dirty on local edits and are
//! saved or deleted one at a time. A failed save keeps the local edit; a
//! failed delete leaves the row where it was.

use contracts::shared::RecordId;

pub trait EditableRow: Clone {
    fn row_id(&self) -> &RecordId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBusy {
    Saving,
    Deleting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorRow<T> {
    pub value: T,
    pub dirty: bool,
    pub busy: Option<RowBusy>,
}

impl<T> EditorRow<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            dirty: false,
            busy: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowEditor<T> {
    rows: Vec<EditorRow<T>>,
}

impl<T> Default for RowEditor<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: EditableRow> RowEditor<T> {
    /// Server order is kept as is
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: rows.into_iter().map(EditorRow::clean).collect(),
        }
    }

    pub fn rows(&self) -> &[EditorRow<T>] {
        &self.rows
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.iter().map(|r| r.value.row_id().clone()).collect()
    }

    pub fn row(&self, id: &RecordId) -> Option<&EditorRow<T>> {
        self.rows.iter().find(|r| r.value.row_id() == id)
    }

    fn row_mut(&mut self, id: &RecordId) -> Option<&mut EditorRow<T>> {
        self.rows.iter_mut().find(|r| r.value.row_id() == id)
    }

    /// Applies a local edit; busy rows are not editable
    pub fn edit(&mut self, id: &RecordId, f: impl FnOnce(&mut T)) -> bool {
        match self.row_mut(id) {
            Some(row) if row.busy.is_none() => {
                f(&mut row.value);
                row.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Marks the row saving and returns what to PUT
    pub fn begin_save(&mut self, id: &RecordId) -> Option<T> {
        let row = self.row_mut(id)?;
        if row.busy.is_some() {
            return None;
        }
        row.busy = Some(RowBusy::Saving);
        Some(row.value.clone())
    }

    pub fn finish_save(&mut self, id: &RecordId, ok: bool) {
        if let Some(row) = self.row_mut(id) {
            row.busy = None;
            if ok {
                row.dirty = false;
            }
        }
    }

    pub fn begin_delete(&mut self, id: &RecordId) -> bool {
        match self.row_mut(id) {
            Some(row) if row.busy.is_none() => {
                row.busy = Some(RowBusy::Deleting);
                true
            }
            _ => false,
        }
    }

    /// Removes exactly `id` on success; otherwise the row stays untouched
    pub fn finish_delete(&mut self, id: &RecordId, ok: bool) {
        if ok {
            self.rows.retain(|r| r.value.row_id() != id);
        } else if let Some(row) = self.row_mut(id) {
            row.busy = None;
        }
    }

    /// Appends a row created on the server
    pub fn push(&mut self, value: T) {
        self.rows.push(EditorRow::clean(value));
    }

    /// Appends the rows of a fresh server listing that are not shown yet.
    /// Rows already present keep their local edits.
    pub fn append_missing(&mut self, fresh: Vec<T>) -> usize {
        let mut added = 0;
        for value in fresh {
            if self.row(value.row_id()).is_none() {
                self.push(value);
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Limit {
        id: RecordId,
        value: String,
    }

    impl EditableRow for Limit {
        fn row_id(&self) -> &RecordId {
            &self.id
        }
    }

    fn editor() -> RowEditor<Limit> {
        RowEditor::new(vec![
            Limit { id: "l1".into(), value: "5".into() },
            Limit { id: "l2".into(), value: "10".into() },
            Limit { id: "l3".into(), value: "15".into() },
        ])
    }

    #[test]
    fn delete_removes_exactly_that_row() {
        let mut editor = editor();
        assert!(editor.begin_delete(&"l2".into()));
        editor.finish_delete(&"l2".into(), true);
        assert_eq!(editor.ids(), vec![RecordId::from("l1"), RecordId::from("l3")]);
    }

    #[test]
    fn failed_delete_leaves_list_unchanged() {
        let mut editor = editor();
        let before = editor.clone();
        assert!(editor.begin_delete(&"l2".into()));
        assert_eq!(editor.row(&"l2".into()).unwrap().busy, Some(RowBusy::Deleting));
        editor.finish_delete(&"l2".into(), false);
        assert_eq!(editor, before);
    }

    #[test]
    fn save_clears_dirty_only_on_success() {
        let mut editor = editor();
        assert!(editor.edit(&"l1".into(), |l| l.value = "7".into()));
        assert!(editor.row(&"l1".into()).unwrap().dirty);

        let sent = editor.begin_save(&"l1".into()).unwrap();
        assert_eq!(sent.value, "7");
        assert!(!editor.edit(&"l1".into(), |l| l.value = "8".into()));
        editor.finish_save(&"l1".into(), false);
        let row = editor.row(&"l1".into()).unwrap();
        assert!(row.dirty);
        assert_eq!(row.value.value, "7");

        editor.begin_save(&"l1".into());
        editor.finish_save(&"l1".into(), true);
        assert!(!editor.row(&"l1".into()).unwrap().dirty);
    }

    #[test]
    fn new_rows_append_in_order() {
        let mut editor = editor();
        editor.push(Limit { id: "l9".into(), value: "1".into() });
        assert_eq!(editor.ids().last(), Some(&RecordId::from("l9")));
        assert!(!editor.row(&"l9".into()).unwrap().dirty);
    }

    #[test]
    fn refetch_appends_only_unknown_rows() {
        let mut editor = editor();
        editor.edit(&"l1".into(), |l| l.value = "6".into());
        let fresh = vec![
            Limit { id: "l1".into(), value: "5".into() },
            Limit { id: "l2".into(), value: "10".into() },
            Limit { id: "l4".into(), value: "20".into() },
        ];
        assert_eq!(editor.append_missing(fresh), 1);
        assert_eq!(editor.ids().len(), 4);
        assert_eq!(editor.row(&"l1".into()).unwrap().value.value, "6");
    }
}
