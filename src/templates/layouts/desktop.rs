use maud::{html, Markup, DOCTYPE};

use crate::auth::SessionUser;
use crate::notices::Notice;
use crate::templates::components::{footer, navbar, notice_stack, NavLink};

/// Per-request frame around every page.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    pub title: String,
    pub user: Option<SessionUser>,
    pub notices: Vec<Notice>,
    pub active: Option<NavLink>,
    /// Pages with file inputs pull in the client-side reader.
    pub with_forms_script: bool,
}

impl PageChrome {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn user(mut self, user: Option<SessionUser>) -> Self {
        self.user = user;
        self
    }

    pub fn notices(mut self, notices: Vec<Notice>) -> Self {
        self.notices = notices;
        self
    }

    pub fn active(mut self, link: NavLink) -> Self {
        self.active = Some(link);
        self
    }

    pub fn with_forms_script(mut self) -> Self {
        self.with_forms_script = true;
        self
    }
}

pub fn desktop_layout(chrome: &PageChrome, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (chrome.title) " | ReMediUse" }
                link rel="stylesheet" href="/static/main.css";
                @if chrome.with_forms_script {
                    script src="/static/forms.js" defer {}
                }
            }
            body {
                (navbar(chrome.user.as_ref(), chrome.active))
                (notice_stack(&chrome.notices))
                (content)
                (footer())
            }
        }
    }
}
