use reqwest::multipart::{Form, Part};
use shared::domain::EventField;

use crate::{draft::EventDraft, error::SubmitError};

pub const IMAGE_KEY: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Everything sent to the create endpoint, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub fields: Vec<(EventField, String)>,
    pub image: ImageAttachment,
}

impl EventPayload {
    pub fn new(draft: &EventDraft, image: ImageAttachment) -> Self {
        let fields = EventField::ALL
            .into_iter()
            .map(|field| (field, draft.wire_value(field)))
            .collect();
        Self { fields, image }
    }

    pub fn value(&self, field: EventField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_form(self) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for (field, value) in self.fields {
            form = form.text(field.key(), value);
        }
        let image = Part::bytes(self.image.bytes)
            .file_name(self.image.file_name)
            .mime_str(&self.image.mime_type)?;
        Ok(form.part(IMAGE_KEY, image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> EventDraft {
        let mut draft = EventDraft::default();
        draft.set(EventField::Title, "React Summit 2026");
        draft.set(EventField::Tags, "a, b ,c");
        draft.set(EventField::Agenda, "x,y");
        draft
    }

    fn attachment() -> ImageAttachment {
        ImageAttachment {
            file_name: "cover.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn payload_lists_every_field_in_wire_order() {
        let payload = EventPayload::new(&filled_draft(), attachment());
        let keys: Vec<_> = payload.fields.iter().map(|(field, _)| *field).collect();
        assert_eq!(keys, EventField::ALL);
        assert_eq!(payload.value(EventField::Title), Some("React Summit 2026"));
        assert_eq!(payload.value(EventField::Mode), Some("offline"));
        assert_eq!(payload.value(EventField::Tags), Some(r#"["a","b","c"]"#));
        assert_eq!(payload.value(EventField::Agenda), Some(r#"["x","y"]"#));
    }

    #[test]
    fn rejects_malformed_image_mime_type() {
        let mut image = attachment();
        image.mime_type = "not a mime".to_string();
        let err = EventPayload::new(&filled_draft(), image)
            .into_form()
            .expect_err("mime should be rejected");
        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(!err.is_local());
    }
}
