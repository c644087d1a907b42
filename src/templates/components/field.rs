use maud::{html, Markup};

use crate::forms::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
    TextArea,
}

impl InputKind {
    fn input_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

/// One labelled input with its inline error, if any.
pub struct FormField<'a> {
    pub name: &'static str,
    pub label: &'a str,
    pub kind: InputKind,
    pub value: &'a str,
    pub placeholder: &'a str,
}

impl<'a> FormField<'a> {
    pub fn new(name: &'static str, label: &'a str, kind: InputKind, value: &'a str) -> Self {
        Self {
            name,
            label,
            kind,
            value,
            placeholder: "",
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn render(&self, errors: &FieldErrors) -> Markup {
        let error = errors.get(self.name);
        html! {
            div class=(if error.is_some() { "field field-invalid" } else { "field" }) {
                label for=(self.name) { (self.label) }
                @match self.kind {
                    InputKind::TextArea => {
                        textarea id=(self.name) name=(self.name) rows="4" placeholder=(self.placeholder) { (self.value) }
                    }
                    kind => {
                        input
                            id=(self.name)
                            name=(self.name)
                            type=(kind.input_type())
                            value=(self.value)
                            placeholder=(self.placeholder)
                            min=[(kind == InputKind::Number).then_some("0")]
                            step=[(self.name == "price").then_some("0.01")];
                    }
                }
                (field_error(errors, self.name))
            }
        }
    }
}

/// File picker backed by a hidden field. `/static/forms.js` reads the chosen
/// file into a `data:` URL and stores it in the hidden input, which is what
/// gets posted.
pub fn upload_field(
    name: &'static str,
    label: &str,
    hint: &str,
    accept: &str,
    value: &str,
    errors: &FieldErrors,
) -> Markup {
    let is_image = accept.starts_with("image/");
    html! {
        div class=(if errors.get(name).is_some() { "field upload field-invalid" } else { "field upload" }) {
            label for=(format!("{name}-upload")) { (label) }
            p class="muted" { (hint) }
            input type="file" id=(format!("{name}-upload")) accept=(accept) data-target=(name);
            input type="hidden" id=(name) name=(name) value=(value);
            @if is_image {
                img class=(if value.is_empty() { "upload-preview hidden" } else { "upload-preview" })
                    id=(format!("{name}-preview")) src=(value) alt="Preview";
            } @else {
                p class=(if value.is_empty() { "upload-status hidden" } else { "upload-status" })
                    id=(format!("{name}-preview")) { "Document uploaded" }
            }
            (field_error(errors, name))
        }
    }
}

pub fn field_error(errors: &FieldErrors, name: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(name) {
            p class="field-error" { (msg) }
        }
    }
}
