//! Profile editing as a draft that is either committed or discarded.

use serde::{Deserialize, Serialize};

/// A committed value plus an optional in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer<T> {
    committed: T,
    draft: Option<T>,
}

impl<T: Clone> EditBuffer<T> {
    pub fn new(committed: T) -> Self {
        Self {
            committed,
            draft: None,
        }
    }

    /// The committed value; drafts are invisible until committed.
    pub fn current(&self) -> &T {
        &self.committed
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Start editing from the committed value. An edit already in
    /// progress is kept as is.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.committed.clone());
        }
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.draft.as_mut()
    }

    /// Replace the committed value with the draft.
    ///
    /// Returns `false` if no edit was in progress.
    pub fn commit(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.committed = draft;
                true
            }
            None => false,
        }
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        self.draft = None;
    }
}

/// The user's profile details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "Username".to_string(),
            email: "user@example.com".to_string(),
        }
    }
}

/// Editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Username,
    Email,
}

impl Profile {
    /// Set a single field, as an input change handler would.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Username => self.username = value,
            ProfileField::Email => self.email = value,
        }
    }
}

impl EditBuffer<Profile> {
    /// Update a field of the draft. Ignored when not editing.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.set(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_applies_draft() {
        let mut profile = EditBuffer::new(Profile::default());
        profile.begin_edit();
        profile.set_field(ProfileField::Username, "ada");
        profile.set_field(ProfileField::Email, "ada@example.com");

        assert_eq!(profile.current().username, "Username");
        assert!(profile.commit());
        assert!(!profile.is_editing());
        assert_eq!(profile.current().username, "ada");
        assert_eq!(profile.current().email, "ada@example.com");
    }

    #[test]
    fn cancel_restores_committed() {
        let mut profile = EditBuffer::new(Profile::default());
        profile.begin_edit();
        profile.set_field(ProfileField::Email, "typo@");
        profile.cancel();

        assert!(!profile.is_editing());
        assert_eq!(profile.current(), &Profile::default());

        // Editing again starts from the committed value, not the old draft.
        profile.begin_edit();
        assert_eq!(profile.draft(), Some(&Profile::default()));
    }

    #[test]
    fn set_field_without_edit_is_ignored() {
        let mut profile = EditBuffer::new(Profile::default());
        profile.set_field(ProfileField::Username, "ignored");
        assert!(!profile.commit());
        assert_eq!(profile.current().username, "Username");
    }

    #[test]
    fn begin_edit_keeps_existing_draft() {
        let mut profile = EditBuffer::new(Profile::default());
        profile.begin_edit();
        profile.set_field(ProfileField::Username, "grace");
        profile.begin_edit();
        assert_eq!(profile.draft().map(|p| p.username.as_str()), Some("grace"));
    }
}
