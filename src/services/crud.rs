//! In-memory CRUD view state shared by the car and hotel panels.
//!
//! A [`CrudPanel`] is an immutable value: every user interaction is an
//! [`CrudAction`] fed to [`CrudPanel::apply`], which returns the next state or
//! a [`ValidationError`]. On error the caller keeps the previous state.

use crate::errors::ValidationError;

/// Schema of a record managed by a [`CrudPanel`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Form contents submitted when adding or editing a record.
    type Draft;

    fn id(&self) -> u64;

    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Replaces every editable field, keeping the id.
    fn apply_draft(&self, draft: Self::Draft) -> Self;

    /// `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

#[derive(Debug, Clone)]
pub enum CrudAction<D> {
    Add(D),
    BeginEdit(u64),
    SubmitEdit(D),
    CancelEdit,
    RequestDelete(u64),
    ConfirmDelete,
    CancelDelete,
    Search(String),
}

#[derive(Debug, Clone)]
pub struct CrudPanel<E> {
    items: Vec<E>,
    editing: Option<u64>,
    pending_delete: Option<u64>,
    search: String,
}

impl<E: Entity> CrudPanel<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self {
            items,
            editing: None,
            pending_delete: None,
            search: String::new(),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn get(&self, id: u64) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn next_id(&self) -> u64 {
        self.items.iter().map(Entity::id).max().unwrap_or(0) + 1
    }

    /// Items matching the current search term, in list order.
    pub fn visible(&self) -> Vec<&E> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    pub fn apply(&self, action: CrudAction<E::Draft>) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match action {
            CrudAction::Add(draft) => {
                E::validate(&draft)?;
                let id = self.next_id();
                next.items.push(E::from_draft(id, draft));
            }
            CrudAction::BeginEdit(id) => {
                self.ensure_exists(id)?;
                next.editing = Some(id);
            }
            CrudAction::SubmitEdit(draft) => {
                let id = self.editing.ok_or(ValidationError::NotEditing)?;
                E::validate(&draft)?;
                let position = self
                    .items
                    .iter()
                    .position(|item| item.id() == id)
                    .ok_or(ValidationError::UnknownId(id))?;
                next.items[position] = self.items[position].apply_draft(draft);
                next.editing = None;
            }
            CrudAction::CancelEdit => {
                next.editing = None;
            }
            CrudAction::RequestDelete(id) => {
                self.ensure_exists(id)?;
                next.pending_delete = Some(id);
            }
            CrudAction::ConfirmDelete => {
                let id = self.pending_delete.ok_or(ValidationError::NothingToDelete)?;
                next.items.retain(|item| item.id() != id);
                next.pending_delete = None;
                if next.editing == Some(id) {
                    next.editing = None;
                }
            }
            CrudAction::CancelDelete => {
                next.pending_delete = None;
            }
            CrudAction::Search(text) => {
                next.search = text;
            }
        }
        Ok(next)
    }

    fn ensure_exists(&self, id: u64) -> Result<(), ValidationError> {
        match self.get(id) {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownId(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::require_text;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    impl Entity for Tag {
        type Draft = String;

        fn id(&self) -> u64 {
            self.id
        }

        fn validate(draft: &String) -> Result<(), ValidationError> {
            require_text("label", draft)
        }

        fn from_draft(id: u64, draft: String) -> Self {
            Tag { id, label: draft }
        }

        fn apply_draft(&self, draft: String) -> Self {
            Tag {
                id: self.id,
                label: draft,
            }
        }

        fn matches(&self, needle: &str) -> bool {
            self.label.to_lowercase().contains(needle)
        }
    }

    fn panel() -> CrudPanel<Tag> {
        CrudPanel::new(vec![
            Tag { id: 1, label: "Nairobi".to_string() },
            Tag { id: 4, label: "Mombasa".to_string() },
        ])
    }

    #[test]
    fn test_add_assigns_next_id() {
        let next = panel().apply(CrudAction::Add("Kisumu".to_string())).unwrap();
        assert_eq!(next.items().len(), 3);
        assert_eq!(next.items()[2].id, 5);
    }

    #[test]
    fn test_add_to_empty_panel_starts_at_one() {
        let empty: CrudPanel<Tag> = CrudPanel::new(vec![]);
        let next = empty.apply(CrudAction::Add("Nakuru".to_string())).unwrap();
        assert_eq!(next.items()[0].id, 1);
    }

    #[test]
    fn test_invalid_add_leaves_state_unchanged() {
        let original = panel();
        let result = original.apply(CrudAction::Add("   ".to_string()));
        assert_eq!(result.unwrap_err(), ValidationError::MissingField("label"));
        assert_eq!(original.items().len(), 2);
    }

    #[test]
    fn test_edit_flow() {
        let editing = panel().apply(CrudAction::BeginEdit(4)).unwrap();
        assert_eq!(editing.editing(), Some(4));

        let done = editing
            .apply(CrudAction::SubmitEdit("Diani".to_string()))
            .unwrap();
        assert_eq!(done.editing(), None);
        assert_eq!(done.get(4).unwrap().label, "Diani");
        assert_eq!(done.get(1).unwrap().label, "Nairobi");
    }

    #[test]
    fn test_submit_without_begin_is_rejected() {
        let result = panel().apply(CrudAction::SubmitEdit("Diani".to_string()));
        assert_eq!(result.unwrap_err(), ValidationError::NotEditing);
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let result = panel().apply(CrudAction::BeginEdit(99));
        assert_eq!(result.unwrap_err(), ValidationError::UnknownId(99));
    }

    #[test]
    fn test_cancel_edit() {
        let next = panel()
            .apply(CrudAction::BeginEdit(1))
            .and_then(|p| p.apply(CrudAction::CancelEdit))
            .unwrap();
        assert_eq!(next.editing(), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let requested = panel().apply(CrudAction::RequestDelete(1)).unwrap();
        assert_eq!(requested.items().len(), 2);
        assert_eq!(requested.pending_delete(), Some(1));

        let cancelled = requested.apply(CrudAction::CancelDelete).unwrap();
        assert_eq!(cancelled.items().len(), 2);
        assert_eq!(cancelled.pending_delete(), None);

        let deleted = requested.apply(CrudAction::ConfirmDelete).unwrap();
        assert_eq!(deleted.items().len(), 1);
        assert!(deleted.get(1).is_none());
    }

    #[test]
    fn test_confirm_without_request_is_rejected() {
        let result = panel().apply(CrudAction::ConfirmDelete);
        assert_eq!(result.unwrap_err(), ValidationError::NothingToDelete);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let next = panel().apply(CrudAction::Search("MOMB".to_string())).unwrap();
        let visible = next.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 4);
        assert_eq!(panel().visible().len(), 2);
    }
}
