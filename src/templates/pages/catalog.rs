// templates/pages/catalog.rs

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::query::CategoryFilter;
use crate::domain::{Category, FilterState, MedicineRecord, SortKey};
use crate::templates::{
    components::{link_button, medicine_card, ButtonStyle, ButtonVariant},
    desktop_layout, PageChrome,
};

pub struct CatalogVm<'a> {
    pub filters: &'a FilterState,
    pub results: Vec<&'a MedicineRecord>,
    pub categories: Vec<Category>,
    pub now: DateTime<Utc>,
}

pub fn catalog_page(chrome: &PageChrome, vm: &CatalogVm) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main class="container catalog" {
                div class="page-heading" {
                    h1 { "Buy Medicines" }
                    p class="muted" {
                        "Search for quality, unused medicines at discounted prices. Filter by category, brand, and expiry date."
                    }
                }
                form id="catalog-filters" method="get" action="/buy" class="catalog-layout" {
                    (filter_panel(vm))
                    div class="catalog-results" {
                        (results_header(vm.filters, vm.results.len()))
                        (active_filters(vm.filters))
                        @if vm.results.is_empty() {
                            (empty_state())
                        } @else {
                            div class="grid-3" {
                                @for rec in &vm.results {
                                    (medicine_card(rec, vm.now))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn filter_panel(vm: &CatalogVm) -> Markup {
    let f = vm.filters;
    html! {
        aside class="filter-panel card" {
            div class="search-box" {
                input type="search" name="q" value=(f.search) placeholder="Search for medicines..." aria-label="Search for medicines";
            }
            h3 { "Filters" }

            h4 { "Category" }
            input type="hidden" name="category" value=(f.category.label());
            ul class="category-list" {
                @let all = CategoryFilter::All;
                li {
                    a href=(f.with_category(all.clone()).href())
                        class=[(f.category == all).then_some("active")] { (all.label()) }
                }
                @for cat in &vm.categories {
                    @let choice = CategoryFilter::Exactly(cat.label().to_string());
                    li {
                        a href=(f.with_category(choice.clone()).href())
                            class=[(f.category == choice).then_some("active")] { (cat.label()) }
                    }
                }
            }

            h4 { "Price Range" }
            div class="price-inputs" {
                label {
                    "Min $"
                    input type="number" name="min_price" min="0" max=(f.price_ceiling()) step="any" value=(f.price_range.min);
                }
                label {
                    "Max $"
                    input type="number" name="max_price" min="0" max=(f.price_ceiling()) step="any" value=(f.price_range.max);
                }
            }

            h4 { "Prescription" }
            label class="checkbox" for="prescription-req" {
                input type="checkbox" id="prescription-req" name="rx" value="1" checked[f.prescription_required()];
                "Prescription Required"
            }
            label class="checkbox" for="no-prescription" {
                input type="checkbox" id="no-prescription" name="no_rx" value="1" checked[f.no_prescription_needed()];
                "No Prescription Needed"
            }

            button type="submit" class="btn btn-primary btn-md btn-block" { "Apply Filters" }
        }
    }
}

fn results_header(f: &FilterState, count: usize) -> Markup {
    html! {
        div class="results-header" {
            span class="muted" { "Showing " strong { (count) } " medicines" }
            label class="sort" {
                span class="sr-only" { "Sort by" }
                select name="sort" onchange="this.form.submit()" {
                    @for key in SortKey::ALL {
                        option value=(key.as_param()) selected[f.sort == key] { (key.label()) }
                    }
                }
            }
        }
    }
}

/// Removable chips, one per active dimension, plus "Clear All".
fn active_filters(f: &FilterState) -> Markup {
    let mut cleared = f.clone();
    cleared.reset();
    html! {
        @if f.has_active_filters() {
            div class="active-filters" {
                @if let CategoryFilter::Exactly(label) = &f.category {
                    a class="chip" href=(f.with_category(CategoryFilter::All).href()) { (label) " ×" }
                }
                @if !f.search.is_empty() {
                    a class="chip" href=(f.without_search().href()) { "Search: " (f.search) " ×" }
                }
                @if !f.has_default_price_range() {
                    a class="chip" href=(f.without_price_range().href()) {
                        "Price: $" (f.price_range.min) " - $" (f.price_range.max) " ×"
                    }
                }
                @if f.prescription_required() {
                    a class="chip" href=(f.without_prescription().href()) { "Prescription Required ×" }
                }
                @if f.no_prescription_needed() {
                    a class="chip" href=(f.without_prescription().href()) { "No Prescription ×" }
                }
                a class="clear-all" href=(cleared.href()) { "Clear All" }
            }
        }
    }
}

fn empty_state() -> Markup {
    html! {
        div class="empty-state" {
            h3 { "No medicines found" }
            p class="muted" { "We couldn't find any medicines matching your criteria." }
            (link_button("/buy", "Reset Filters", ButtonStyle::new(ButtonVariant::Outline)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_link_to_state_without_that_dimension() {
        let f = FilterState::from_pairs([("q", "para"), ("category", "Pain Relief"), ("rx", "1")]);
        let html = active_filters(&f).into_string();
        assert!(html.contains("Search: para"));
        assert!(html.contains("Prescription Required"));
        assert!(html.contains("href=\"/buy?q=para&amp;rx=1\""));
        assert!(html.contains("Clear All"));
    }

    #[test]
    fn price_inputs_accept_fractions_up_to_the_catalog_ceiling() {
        let f = FilterState::from_pairs_within([("min_price", "12.3")], 50.0);
        let vm = CatalogVm {
            filters: &f,
            results: Vec::new(),
            categories: Category::ALL.to_vec(),
            now: Utc::now(),
        };
        let html = filter_panel(&vm).into_string();
        assert!(html.contains(r#"name="min_price" min="0" max="50" step="any" value="12.3""#));
        assert!(html.contains(r#"name="max_price" min="0" max="50" step="any" value="50""#));
        assert!(!html.contains(r#"step="1""#));
    }

    #[test]
    fn no_chips_without_active_filters() {
        let f = FilterState::from_pairs([("sort", "newest")]);
        assert_eq!(active_filters(&f).into_string(), "");
    }
}
