use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Field for an input's `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

/// Values currently typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Apply a change event from the form. Unknown field names are ignored.
    pub fn apply_input(&mut self, name: &str, value: impl Into<String>) -> bool {
        match ContactField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Freeze the draft and reset the form.
    pub fn submit(&mut self) -> ContactSubmission {
        ContactSubmission {
            draft: std::mem::take(self),
        }
    }
}

/// What the visitor sent. Kept in memory only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub draft: ContactDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_input_updates_named_field() {
        let mut draft = ContactDraft::default();
        assert!(draft.apply_input("name", "John Doe"));
        assert!(draft.apply_input("email", "you@example.com"));
        assert!(draft.apply_input("subject", "Quote Request"));
        assert!(draft.apply_input("message", "200 EPDM gaskets"));

        assert_eq!(draft.get(ContactField::Name), "John Doe");
        assert_eq!(draft.get(ContactField::Email), "you@example.com");
        assert_eq!(draft.get(ContactField::Subject), "Quote Request");
        assert_eq!(draft.get(ContactField::Message), "200 EPDM gaskets");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut draft = ContactDraft::default();
        assert!(!draft.apply_input("phone", "123"));
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_submit_resets_draft() {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Name, "Ayesha");
        draft.set(ContactField::Message, "Hello");

        let submission = draft.submit();
        assert_eq!(submission.draft.name, "Ayesha");
        assert_eq!(submission.draft.message, "Hello");
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_submission_serializes_flat() {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Email, "a@b.pk");
        let json = serde_json::to_value(draft.submit()).unwrap();
        assert_eq!(json["email"], "a@b.pk");
        assert_eq!(json["name"], "");
    }
}
