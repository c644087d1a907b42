use maud::{html, Markup};

use crate::auth::SessionUser;
use crate::templates::components::{submit_button, ButtonSize, ButtonStyle, ButtonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Buy,
    Sell,
    Donate,
    Verification,
    Help,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::Buy,
        NavLink::Sell,
        NavLink::Donate,
        NavLink::Verification,
        NavLink::Help,
    ];

    pub fn href(self) -> &'static str {
        match self {
            NavLink::Buy => "/buy",
            NavLink::Sell => "/sell",
            NavLink::Donate => "/donate",
            NavLink::Verification => "/verification",
            NavLink::Help => "/help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Buy => "Buy",
            NavLink::Sell => "Sell",
            NavLink::Donate => "Donate",
            NavLink::Verification => "Verification",
            NavLink::Help => "Help",
        }
    }
}

pub fn brand_mark() -> Markup {
    html! {
        span class="brand-remedi" { "ReMedi" }
        span class="brand-use" { "Use" }
    }
}

/// Sign-in / sign-out form. The provider is the only thing posted.
pub fn auth_control(user: Option<&SessionUser>) -> Markup {
    let small = ButtonStyle::new(ButtonVariant::Primary).size(ButtonSize::Small);
    html! {
        @match user {
            Some(user) => {
                a href="/profile" class="nav-user" title=(user.email) {
                    span class="avatar" { (user.initial()) }
                    span { (user.name) }
                }
                form method="post" action="/auth/logout" class="inline" {
                    (submit_button("Sign Out", ButtonStyle::new(ButtonVariant::Outline).size(ButtonSize::Small)))
                }
            }
            None => {
                form method="post" action="/auth/login" class="inline" {
                    input type="hidden" name="provider" value="google";
                    (submit_button("Sign In", small))
                }
            }
        }
    }
}

pub fn navbar(user: Option<&SessionUser>, active: Option<NavLink>) -> Markup {
    html! {
        header class="navbar" {
            div class="container navbar-inner" {
                a href="/" class="brand" { (brand_mark()) }
                nav {
                    ul {
                        @for link in NavLink::ALL {
                            li {
                                a href=(link.href()) class=[(active == Some(link)).then_some("active")] {
                                    (link.label())
                                }
                            }
                        }
                    }
                }
                div class="navbar-actions" {
                    (auth_control(user))
                }
            }
        }
    }
}
