//! # Enquiry Form
//!
//! Explicit form state for the booking enquiry, plus the pure field reducer
//! and validator. The form is seeded from a `Subject` when the modal opens;
//! only the two contact fields are editable.
//!
//! ```text
//! EnquiryForm
//! ├── subject: Subject                    // seed, never mutated
//! ├── contact_name / contact_email        // edited per keystroke
//! ├── focused: ContactField
//! ├── touched: BTreeSet<Field>            // blurred or submit-attempted
//! ├── errors: ValidationErrors            // recomputed for touched fields
//! ├── lifecycle: RequestLifecycle<String> // success banner text on Ok
//! └── instance / attempt                  // tags for background results
//! ```

use std::collections::{BTreeMap, BTreeSet};

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::api::EnquiryPayload;
use crate::core::lifecycle::RequestLifecycle;

pub const SUCCESS_MESSAGE: &str = "Thank you for your submission!";

const MIN_SUBJECT_NAME: usize = 2;
const MIN_SUBJECT_LOCATION: usize = 2;
const MIN_CONTACT_NAME: usize = 3;
const MIN_CONTACT_EMAIL: usize = 3;

/// The hotel an enquiry refers to.
///
/// Records may spell each key plainly (`id`) or hotel-prefixed (`hotel_id`);
/// when both appear the hotel-prefixed one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubjectRecord")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: Option<String>,
}

#[derive(Deserialize)]
struct SubjectRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    hotel_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    hotel_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    hotel_location: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    hotel_image: Option<String>,
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = String;

    fn try_from(record: SubjectRecord) -> Result<Self, Self::Error> {
        fn pick(prefixed: Option<String>, plain: Option<String>, key: &str) -> Result<String, String> {
            prefixed
                .or(plain)
                .ok_or_else(|| format!("missing field `{key}` (or `hotel_{key}`)"))
        }
        Ok(Self {
            id: pick(record.hotel_id, record.id, "id")?,
            name: pick(record.hotel_name, record.name, "name")?,
            location: pick(record.hotel_location, record.location, "location")?,
            image: record.hotel_image.or(record.image),
        })
    }
}

/// Every validated field, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    SubjectId,
    SubjectName,
    SubjectLocation,
    ContactName,
    ContactEmail,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::SubjectId,
        Field::SubjectName,
        Field::SubjectLocation,
        Field::ContactName,
        Field::ContactEmail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::SubjectId => "Hotel ID",
            Field::SubjectName => "Hotel name",
            Field::SubjectLocation => "Location",
            Field::ContactName => "Name",
            Field::ContactEmail => "Email",
        }
    }
}

/// The user-editable subset of `Field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
}

impl ContactField {
    pub fn field(self) -> Field {
        match self {
            ContactField::Name => Field::ContactName,
            ContactField::Email => Field::ContactEmail,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Name,
        }
    }
}

/// One keystroke-level change to a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

/// Field-scoped validation messages.
pub type ValidationErrors = BTreeMap<Field, String>;

/// Tags a background submission so late results land on the right form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub instance: u64,
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryForm {
    pub instance: u64,
    pub subject: Subject,
    pub contact_name: String,
    pub contact_email: String,
    pub focused: ContactField,
    pub touched: BTreeSet<Field>,
    pub errors: ValidationErrors,
    pub lifecycle: RequestLifecycle<String>,
    pub attempt: u32,
}

/// Apply one edit to a string buffer.
pub fn apply_edit(value: &mut String, edit: FieldEdit) {
    match edit {
        FieldEdit::Insert(c) if !c.is_control() => value.push(c),
        FieldEdit::Insert(_) => {}
        FieldEdit::Paste(text) => {
            // Single-line fields: drop newlines from pasted text
            value.extend(text.chars().filter(|c| !c.is_control()));
        }
        FieldEdit::Backspace => {
            value.pop();
        }
        FieldEdit::Clear => value.clear(),
    }
}

fn check_text(label: &str, value: &str, min: usize) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some(format!("{label} is required"))
    } else if value.chars().count() < min {
        Some(format!("{label} must be at least {min} characters"))
    } else {
        None
    }
}

fn check_field(field: Field, value: &str) -> Option<String> {
    let label = field.label();
    match field {
        Field::SubjectId => {
            let value = value.trim();
            if value.is_empty() {
                Some(format!("{label} is required"))
            } else if value.parse::<i64>().is_err() {
                Some(format!("{label} must be a number"))
            } else {
                None
            }
        }
        Field::SubjectName => check_text(label, value, MIN_SUBJECT_NAME),
        Field::SubjectLocation => check_text(label, value, MIN_SUBJECT_LOCATION),
        Field::ContactName => check_text(label, value, MIN_CONTACT_NAME),
        Field::ContactEmail => check_text(label, value, MIN_CONTACT_EMAIL).or_else(|| {
            (!EmailAddress::is_valid(value.trim()))
                .then(|| format!("{label} must be a valid email address"))
        }),
    }
}

impl EnquiryForm {
    pub fn new(instance: u64, subject: Subject) -> Self {
        Self {
            instance,
            subject,
            contact_name: String::new(),
            contact_email: String::new(),
            focused: ContactField::Name,
            touched: BTreeSet::new(),
            errors: ValidationErrors::new(),
            lifecycle: RequestLifecycle::Idle,
            attempt: 0,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::SubjectId => &self.subject.id,
            Field::SubjectName => &self.subject.name,
            Field::SubjectLocation => &self.subject.location,
            Field::ContactName => &self.contact_name,
            Field::ContactEmail => &self.contact_email,
        }
    }

    fn contact_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.contact_name,
            ContactField::Email => &mut self.contact_email,
        }
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            instance: self.instance,
            attempt: self.attempt,
        }
    }

    /// Validate every field and build the wire payload.
    pub fn validate(&self) -> Result<EnquiryPayload, ValidationErrors> {
        let errors: ValidationErrors = Field::ALL
            .iter()
            .filter_map(|&field| check_field(field, self.value(field)).map(|msg| (field, msg)))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EnquiryPayload {
            // Checked by check_field above
            hotel: self.subject.id.trim().parse().unwrap_or_default(),
            enquiry_hotel: self.subject.name.trim().to_string(),
            enquiry_location: self.subject.location.trim().to_string(),
            enquiry_name: self.contact_name.trim().to_string(),
            enquiry_email: self.contact_email.trim().to_string(),
        })
    }

    /// Recompute errors, keeping only those for touched fields.
    fn revalidate_touched(&mut self) {
        self.errors = Field::ALL
            .iter()
            .filter(|field| self.touched.contains(*field))
            .filter_map(|&field| check_field(field, self.value(field)).map(|msg| (field, msg)))
            .collect();
    }

    /// Keystroke reducer for the focused contact field.
    pub fn edit(&mut self, edit: FieldEdit) {
        let focused = self.focused;
        apply_edit(self.contact_mut(focused), edit);
        self.revalidate_touched();
    }

    /// Move focus; the field being left counts as touched.
    pub fn focus(&mut self, field: ContactField) {
        if field != self.focused {
            self.touched.insert(self.focused.field());
            self.focused = field;
            self.revalidate_touched();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    /// A failed submit attempt: every field becomes touched.
    pub fn reject(&mut self, errors: ValidationErrors) {
        self.touched.extend(Field::ALL);
        self.errors = errors;
    }

    /// Back to the seed: contact fields empty, subject untouched.
    pub fn reset_contact(&mut self) {
        self.contact_name.clear();
        self.contact_email.clear();
        self.focused = ContactField::Name;
        self.touched.clear();
        self.errors.clear();
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
