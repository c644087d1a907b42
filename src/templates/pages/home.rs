// templates/pages/home.rs

use crate::templates::{
    components::{link_button, ButtonSize, ButtonStyle, ButtonVariant},
    desktop_layout, PageChrome,
};
use maud::{html, Markup};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1607619056574-7b8d3ee536b2?q=80&w=2940&auto=format&fit=crop";

/// (search term, label)
const POPULAR_SEARCHES: [(&str, &str); 4] = [
    ("paracetamol", "Paracetamol"),
    ("antibiotic", "Antibiotics"),
    ("vitamins", "Vitamins"),
    ("blood pressure", "Blood Pressure"),
];

struct ActionCard {
    title: &'static str,
    body: &'static str,
    href: &'static str,
    cta: &'static str,
}

const ACTION_CARDS: [ActionCard; 3] = [
    ActionCard {
        title: "Find Medicines",
        body: "Search for quality, unused medicines at discounted prices.",
        href: "/buy",
        cta: "Browse Medicines",
    },
    ActionCard {
        title: "Sell Medicines",
        body: "Got extra medicines? List them here and recover some of your costs.",
        href: "/sell",
        cta: "List a Medicine",
    },
    ActionCard {
        title: "Donate Medicines",
        body: "Help someone in need. Donate your unused medicines to verified NGOs.",
        href: "/donate",
        cta: "Donate Now",
    },
];

const FEATURES: [(&str, &str); 6] = [
    (
        "Smart AI Pricing",
        "Our AI automatically calculates the best price based on expiry date and demand.",
    ),
    (
        "Expiry Tracking",
        "Never let medicines go to waste. Get reminders before they expire.",
    ),
    (
        "Verification & Safety",
        "All medicines are checked for compliance. Buy and sell with confidence.",
    ),
    (
        "Wishlist & Alerts",
        "Save medicines for later and get alerts when they become available.",
    ),
    (
        "Emergency Requests",
        "Need medicine urgently? Post a request and get fast responses.",
    ),
    (
        "NGO Partnerships",
        "We work with NGOs to distribute donated medicines to those in need.",
    ),
];

/// (title, description, image)
const STEPS: [(&str, &str, &str); 4] = [
    (
        "Create an Account",
        "Sign up in seconds using your email or social accounts.",
        "https://images.unsplash.com/photo-1460672985063-6764ac8b9c74?w=800&auto=format&fit=crop&q=60",
    ),
    (
        "List Your Medicines",
        "Add details about your unused medicines, let our AI help price them appropriately.",
        "https://images.unsplash.com/photo-1576671414121-aa2d60f2e9af?w=800&auto=format&fit=crop&q=60",
    ),
    (
        "Verification & Safety",
        "We verify all medicines for compliance with regulations. Safety is our top priority.",
        "https://images.unsplash.com/photo-1587854680352-936b22b91030?w=800&auto=format&fit=crop&q=60",
    ),
    (
        "Connect & Transact",
        "Connect with buyers/sellers or donate directly to NGOs. Complete secure transactions.",
        "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?w=800&auto=format&fit=crop&q=60",
    ),
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
    content: &'static str,
}

const USER_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Regular User",
        avatar: "https://randomuser.me/api/portraits/women/12.jpg",
        content: "I found my regular medications at 40% off the retail price. The verification process made me feel secure about my purchase. This platform is a game-changer for people like me who are on long-term medication.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Seller",
        avatar: "https://randomuser.me/api/portraits/men/22.jpg",
        content: "After my treatment changed, I had several unopened medicine boxes that would have gone to waste. ReMediUse helped me find buyers, and I recovered almost half of what I spent. The AI pricing tool was especially helpful.",
    },
    Testimonial {
        name: "Emma Williams",
        role: "Buyer",
        avatar: "https://randomuser.me/api/portraits/women/33.jpg",
        content: "The expiry tracking feature is fantastic! I get notifications when medicines I'm interested in are about to expire, which means even better discounts. The interface is so simple and intuitive to use.",
    },
];

const NGO_TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "HealthBridge Foundation",
        role: "Partner NGO",
        avatar: "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?w=200&auto=format&fit=crop&q=60",
        content: "Through ReMediUse, we've received thousands of medicine donations that have helped communities without access to healthcare. The verification system ensures we only receive usable medicines.",
    },
    Testimonial {
        name: "Global Health Connect",
        role: "Medical Relief Organization",
        avatar: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=200&auto=format&fit=crop&q=60",
        content: "ReMediUse has streamlined our medicine collection process. The platform's categorization and expiry tracking have made our distribution efforts more efficient. A true ally in our mission.",
    },
];

const DOCTOR_TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        name: "Dr. Amanda Rodriguez",
        role: "General Physician",
        avatar: "https://randomuser.me/api/portraits/women/65.jpg",
        content: "I recommend ReMediUse to patients who struggle with medication costs. The platform's verification process aligns with medical standards, and I've seen firsthand how it helps improve medication adherence among my patients.",
    },
    Testimonial {
        name: "Dr. James Wilson",
        role: "Cardiologist",
        avatar: "https://randomuser.me/api/portraits/men/45.jpg",
        content: "For patients with chronic conditions requiring expensive medications, ReMediUse has been a reliable alternative. I appreciate their strict verification protocols and the transparency they provide about each medicine's history.",
    },
];

pub fn home_page(chrome: &PageChrome) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main {
                (hero())
                (features())
                (how_it_works())
                (testimonials())
                (call_to_action())
            }
        },
    )
}

fn search_href(term: &str) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", term)
        .finish();
    format!("/buy?{qs}")
}

fn hero() -> Markup {
    html! {
        section class="hero" {
            div class="container hero-grid" {
                div {
                    h1 { "Buy, Sell & Donate " span class="accent" { "Unused Medicines" } }
                    p class="lead" {
                        "Find affordable medicines or list your own in seconds. Help reduce waste and save lives."
                    }
                    div class="actions" {
                        (link_button("/buy", "Get Started", ButtonStyle::PRIMARY.size(ButtonSize::Large)))
                        (link_button("/learn-more", "Learn More", ButtonStyle::new(ButtonVariant::Outline).size(ButtonSize::Large)))
                    }
                    form class="search-box" method="get" action="/buy" {
                        input type="text" name="q" placeholder="Search for medicines..." aria-label="Search for medicines";
                        button type="submit" class="btn btn-primary btn-md" { "Search" }
                    }
                    p class="popular-searches" {
                        "Popular searches: "
                        @for (term, label) in POPULAR_SEARCHES {
                            a href=(search_href(term)) { (label) } " "
                        }
                    }
                }
                img class="hero-image" src=(HERO_IMAGE) alt="Medicine Donation";
            }
            div class="container action-cards" {
                @for card in &ACTION_CARDS {
                    div class="card" {
                        h3 { (card.title) }
                        p { (card.body) }
                        (link_button(card.href, card.cta, ButtonStyle::new(ButtonVariant::Secondary)))
                    }
                }
            }
        }
    }
}

fn features() -> Markup {
    html! {
        section class="features" {
            div class="container" {
                h2 { "Why Choose ReMediUse?" }
                p class="lead" {
                    "Our platform offers innovative features to make buying, selling, and donating medicines simple, safe and beneficial for everyone."
                }
                div class="grid-3" {
                    @for (title, description) in FEATURES {
                        div class="card feature" {
                            h3 { (title) }
                            p { (description) }
                        }
                    }
                }
            }
        }
    }
}

fn how_it_works() -> Markup {
    html! {
        section class="how-it-works" {
            div class="container" {
                h2 { "How ReMediUse Works" }
                p class="lead" {
                    "Our simple 4-step process makes it easy to buy, sell, and donate unused medicines safely."
                }
                ol class="steps" {
                    @for (i, (title, description, image)) in STEPS.iter().enumerate() {
                        li class="step" {
                            img src=(image) alt=(title) loading="lazy";
                            span class="step-number" { (i + 1) }
                            h3 { (title) }
                            p { (description) }
                        }
                    }
                }
                (link_button("/register", "Join ReMediUse Today", ButtonStyle::PRIMARY))
            }
        }
    }
}

fn testimonial_group(heading: &str, items: &[Testimonial]) -> Markup {
    html! {
        div class="testimonial-group" {
            h3 { (heading) }
            div class="grid-3" {
                @for t in items {
                    figure class="card testimonial" {
                        blockquote { (t.content) }
                        figcaption {
                            img class="avatar" src=(t.avatar) alt=(t.name) loading="lazy";
                            strong { (t.name) }
                            span class="muted" { (t.role) }
                        }
                    }
                }
            }
        }
    }
}

fn testimonials() -> Markup {
    html! {
        section class="testimonials" {
            div class="container" {
                h2 { "What People Say About Us" }
                p class="lead" { "Hear from our community of users, partners, and healthcare professionals." }
                (testimonial_group("Users", &USER_TESTIMONIALS))
                (testimonial_group("NGOs", &NGO_TESTIMONIALS))
                (testimonial_group("Healthcare Professionals", &DOCTOR_TESTIMONIALS))
            }
        }
    }
}

fn call_to_action() -> Markup {
    html! {
        section class="cta" {
            div class="container" {
                h2 { "Ready to Join the ReMediUse Community?" }
                p {
                    "Start buying, selling, or donating medicines today. Join thousands of users making healthcare more accessible."
                }
                div class="actions" {
                    (link_button("/register", "Create an Account", ButtonStyle::PRIMARY.size(ButtonSize::Large)))
                    (link_button("/learn-more", "Learn More", ButtonStyle::new(ButtonVariant::Outline).size(ButtonSize::Large)))
                }
            }
        }
    }
}
