use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Visual options for a button or button-styled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl ButtonStyle {
    pub const PRIMARY: ButtonStyle = ButtonStyle {
        variant: ButtonVariant::Primary,
        size: ButtonSize::Medium,
        full_width: false,
    };

    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn class(&self) -> String {
        let variant = match self.variant {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        };
        let size = match self.size {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
            ButtonSize::Large => "btn-lg",
        };
        let mut class = format!("btn {variant} {size}");
        if self.full_width {
            class.push_str(" btn-block");
        }
        class
    }
}

pub fn link_button(href: &str, label: &str, style: ButtonStyle) -> Markup {
    html! {
        a href=(href) class=(style.class()) { (label) }
    }
}

pub fn submit_button(label: &str, style: ButtonStyle) -> Markup {
    html! {
        button type="submit" class=(style.class()) { (label) }
    }
}
