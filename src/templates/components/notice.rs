use maud::{html, Markup};

use crate::notices::{Notice, NoticeVariant};

pub fn notice_stack(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div class="notices" role="status" aria-live="polite" {
                @for n in notices {
                    @let class = match n.variant {
                        NoticeVariant::Default => "notice",
                        NoticeVariant::Destructive => "notice notice-destructive",
                    };
                    div class=(class) {
                        p class="notice-title" { (n.title) }
                        @if let Some(desc) = &n.description {
                            p class="notice-description" { (desc) }
                        }
                    }
                }
            }
        }
    }
}
