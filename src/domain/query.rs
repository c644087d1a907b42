// src/domain/query.rs
//
// Catalog filtering and ordering. Pure functions over the static catalog.

use crate::domain::medicine::MedicineRecord;
use crate::domain::pricing::discounted_price;

pub const ALL_CATEGORIES: &str = "All Categories";
/// Smallest upper bound the price filter starts from.
pub const PRICE_SLIDER_MAX: f64 = 20.0;

/// Upper bound of the default price range for `records`: the slider
/// maximum, raised to the next whole amount when a listing sells above it.
pub fn price_ceiling(records: &[MedicineRecord]) -> f64 {
    records
        .iter()
        .map(discounted_price)
        .filter(|p| p.is_finite())
        .fold(PRICE_SLIDER_MAX, |ceiling, p| ceiling.max(p.ceil()))
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact label match; an unknown label simply matches nothing.
    Exactly(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exactly(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exactly(label) => label,
        }
    }

    fn matches(&self, rec: &MedicineRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exactly(label) => rec.category.label() == label,
        }
    }
}

/// Inclusive bounds on the discounted price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// The unfiltered range `[0, ceiling]`.
    pub fn up_to(ceiling: f64) -> Self {
        Self { min: 0.0, max: ceiling }
    }

    /// Bounds given in the wrong order are swapped.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The two prescription checkboxes collapse into one selector, which makes
/// "both checked" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrescriptionFilter {
    #[default]
    Any,
    RequiredOnly,
    NotRequiredOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    ExpirySoonest,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::ExpirySoonest,
        SortKey::Newest,
    ];

    /// Unknown keys fall back to relevance.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-low" => SortKey::PriceLowToHigh,
            "price-high" => SortKey::PriceHighToLow,
            "expiry" => SortKey::ExpirySoonest,
            "newest" => SortKey::Newest,
            _ => SortKey::Relevance,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::ExpirySoonest => "expiry",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::ExpirySoonest => "Expiry Date",
            SortKey::Newest => "Newest First",
        }
    }
}

/// Catalog page filter state. Lives for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    prescription: PrescriptionFilter,
    pub sort: SortKey,
    price_ceiling: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_price_ceiling(PRICE_SLIDER_MAX)
    }
}

impl FilterState {
    /// Unfiltered state whose default price range ends at `ceiling`.
    pub fn with_price_ceiling(ceiling: f64) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price_range: PriceRange::up_to(ceiling),
            prescription: PrescriptionFilter::Any,
            sort: SortKey::Relevance,
            price_ceiling: ceiling,
        }
    }

    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn has_default_price_range(&self) -> bool {
        self.price_range == PriceRange::up_to(self.price_ceiling)
    }

    pub fn prescription(&self) -> PrescriptionFilter {
        self.prescription
    }

    pub fn prescription_required(&self) -> bool {
        self.prescription == PrescriptionFilter::RequiredOnly
    }

    pub fn no_prescription_needed(&self) -> bool {
        self.prescription == PrescriptionFilter::NotRequiredOnly
    }

    /// Checking "Prescription Required" clears "No Prescription Needed".
    pub fn set_prescription_required(&mut self, checked: bool) {
        if checked {
            self.prescription = PrescriptionFilter::RequiredOnly;
        } else if self.prescription == PrescriptionFilter::RequiredOnly {
            self.prescription = PrescriptionFilter::Any;
        }
    }

    /// Checking "No Prescription Needed" clears "Prescription Required".
    pub fn set_no_prescription_needed(&mut self, checked: bool) {
        if checked {
            self.prescription = PrescriptionFilter::NotRequiredOnly;
        } else if self.prescription == PrescriptionFilter::NotRequiredOnly {
            self.prescription = PrescriptionFilter::Any;
        }
    }

    /// Back to the unfiltered state. The price ceiling belongs to the
    /// catalog, not the visitor, so it survives.
    pub fn reset(&mut self) {
        *self = Self::with_price_ceiling(self.price_ceiling);
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != CategoryFilter::All
            || !self.has_default_price_range()
            || self.prescription != PrescriptionFilter::Any
    }

    /// Build from decoded query pairs against the bundled catalog's range.
    #[cfg(test)]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_pairs_within(pairs, PRICE_SLIDER_MAX)
    }

    /// Build from decoded query pairs. Pairs apply in order, so a later
    /// prescription checkbox wins over an earlier one. Missing price bounds
    /// default to `[0, ceiling]`.
    pub fn from_pairs_within<I, K, V>(pairs: I, ceiling: f64) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::with_price_ceiling(ceiling);
        let mut min = None;
        let mut max = None;

        for (k, v) in pairs {
            let v = v.as_ref();
            match k.as_ref() {
                "q" => state.search = v.trim().to_string(),
                "category" => state.category = CategoryFilter::parse(v),
                "min_price" => min = v.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
                "max_price" => max = v.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
                "rx" => state.set_prescription_required(is_checked(v)),
                "no_rx" => state.set_no_prescription_needed(is_checked(v)),
                "sort" => state.sort = SortKey::parse(v),
                _ => {}
            }
        }

        let defaults = PriceRange::up_to(ceiling);
        state.price_range = PriceRange::new(min.unwrap_or(defaults.min), max.unwrap_or(defaults.max));
        state
    }

    /// Query string reproducing this state; default dimensions are omitted.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            ser.append_pair("q", &self.search);
        }
        if let CategoryFilter::Exactly(label) = &self.category {
            ser.append_pair("category", label);
        }
        if !self.has_default_price_range() {
            ser.append_pair("min_price", &self.price_range.min.to_string());
            ser.append_pair("max_price", &self.price_range.max.to_string());
        }
        match self.prescription {
            PrescriptionFilter::RequiredOnly => {
                ser.append_pair("rx", "1");
            }
            PrescriptionFilter::NotRequiredOnly => {
                ser.append_pair("no_rx", "1");
            }
            PrescriptionFilter::Any => {}
        }
        if self.sort != SortKey::Relevance {
            ser.append_pair("sort", self.sort.as_param());
        }
        ser.finish()
    }

    /// `/buy` link for this state.
    pub fn href(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            "/buy".to_string()
        } else {
            format!("/buy?{qs}")
        }
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn without_search(&self) -> Self {
        Self {
            search: String::new(),
            ..self.clone()
        }
    }

    pub fn without_price_range(&self) -> Self {
        Self {
            price_range: PriceRange::up_to(self.price_ceiling),
            ..self.clone()
        }
    }

    pub fn without_prescription(&self) -> Self {
        Self {
            prescription: PrescriptionFilter::Any,
            ..self.clone()
        }
    }

    fn matches(&self, rec: &MedicineRecord) -> bool {
        self.matches_search(rec)
            && self.category.matches(rec)
            && self.price_range.contains(discounted_price(rec))
            && self.matches_prescription(rec)
    }

    fn matches_search(&self, rec: &MedicineRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        rec.name.to_lowercase().contains(&needle) || rec.brand.to_lowercase().contains(&needle)
    }

    fn matches_prescription(&self, rec: &MedicineRecord) -> bool {
        match self.prescription {
            PrescriptionFilter::Any => true,
            PrescriptionFilter::RequiredOnly => rec.prescription,
            PrescriptionFilter::NotRequiredOnly => !rec.prescription,
        }
    }
}

fn is_checked(v: &str) -> bool {
    matches!(v, "1" | "on" | "true")
}

/// Filter then sort. The catalog is never reordered in place.
pub fn query_catalog<'a>(catalog: &'a [MedicineRecord], filters: &FilterState) -> Vec<&'a MedicineRecord> {
    let mut result: Vec<&MedicineRecord> = catalog.iter().filter(|m| filters.matches(m)).collect();

    // sort_by is stable; equal keys keep catalog order
    match filters.sort {
        SortKey::Relevance => {}
        SortKey::PriceLowToHigh => {
            result.sort_by(|a, b| discounted_price(a).total_cmp(&discounted_price(b)))
        }
        SortKey::PriceHighToLow => {
            result.sort_by(|a, b| discounted_price(b).total_cmp(&discounted_price(a)))
        }
        SortKey::ExpirySoonest => result.sort_by_key(|m| m.expiry_date),
        SortKey::Newest => result.sort_by(|a, b| b.listing_date.cmp(&a.listing_date)),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::medicine::Category;

    fn catalog() -> Catalog {
        Catalog::seeded().unwrap()
    }

    fn ids(records: &[&MedicineRecord]) -> Vec<String> {
        records.iter().map(|m| m.id.clone()).collect()
    }

    fn every_filter_state() -> Vec<FilterState> {
        let mut states = Vec::new();
        let searches = ["", "ol", "TYLENOL", "zzz", "vitamin"];
        let mut categories = vec![CategoryFilter::All, CategoryFilter::Exactly("Unknown".into())];
        categories.extend(Category::ALL.iter().map(|c| CategoryFilter::Exactly(c.label().into())));
        let ranges = [
            PriceRange::up_to(PRICE_SLIDER_MAX),
            PriceRange::new(8.0, 12.5),
            PriceRange::new(0.0, 7.0),
        ];
        let rx = [
            PrescriptionFilter::Any,
            PrescriptionFilter::RequiredOnly,
            PrescriptionFilter::NotRequiredOnly,
        ];

        for s in searches {
            for c in &categories {
                for r in ranges {
                    for p in rx {
                        for sort in SortKey::ALL {
                            states.push(FilterState {
                                search: s.to_string(),
                                category: c.clone(),
                                price_range: r,
                                prescription: p,
                                sort,
                                price_ceiling: PRICE_SLIDER_MAX,
                            });
                        }
                    }
                }
            }
        }
        states
    }

    #[test]
    fn every_result_satisfies_every_active_predicate() {
        let catalog = catalog();
        for state in every_filter_state() {
            let out = query_catalog(catalog.records(), &state);
            for rec in &out {
                if !state.search.is_empty() {
                    let n = state.search.to_lowercase();
                    assert!(
                        rec.name.to_lowercase().contains(&n) || rec.brand.to_lowercase().contains(&n),
                        "{} fails search {:?}",
                        rec.id,
                        state.search
                    );
                }
                if let CategoryFilter::Exactly(label) = &state.category {
                    assert_eq!(rec.category.label(), label);
                }
                let price = discounted_price(rec);
                assert!(price >= state.price_range.min && price <= state.price_range.max);
                match state.prescription {
                    PrescriptionFilter::RequiredOnly => assert!(rec.prescription),
                    PrescriptionFilter::NotRequiredOnly => assert!(!rec.prescription),
                    PrescriptionFilter::Any => {}
                }
            }

            // nothing that matches is dropped
            let expected = catalog.records().iter().filter(|m| state.matches(m)).count();
            assert_eq!(out.len(), expected);
        }
    }

    #[test]
    fn price_sorts_are_exact_reverses() {
        let catalog = catalog();
        let mut asc = FilterState::default();
        asc.sort = SortKey::PriceLowToHigh;
        let mut desc = FilterState::default();
        desc.sort = SortKey::PriceHighToLow;

        let a = ids(&query_catalog(catalog.records(), &asc));
        let mut d = ids(&query_catalog(catalog.records(), &desc));
        d.reverse();
        assert_eq!(a.len(), 6);
        assert_eq!(a, d);
        assert_eq!(a.first().map(String::as_str), Some("med-001"));
    }

    #[test]
    fn reset_reproduces_full_catalog_in_order() {
        let catalog = catalog();
        let mut state = FilterState::from_pairs([("q", "mg"), ("category", "Allergy"), ("rx", "1"), ("sort", "newest")]);
        assert!(state.has_active_filters());

        state.reset();
        assert!(!state.has_active_filters());
        let all: Vec<String> = catalog.records().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids(&query_catalog(catalog.records(), &state)), all);

        state.reset();
        assert_eq!(ids(&query_catalog(catalog.records(), &state)), all);
    }

    fn pricier_catalog() -> Catalog {
        let mut records = catalog().records().to_vec();
        let last = records.len() - 1;
        records[last].price = 49.99;
        records[last].discount_percentage = 0.0;
        Catalog::new(records).unwrap()
    }

    #[test]
    fn ceiling_follows_the_most_expensive_listing() {
        assert_eq!(price_ceiling(catalog().records()), PRICE_SLIDER_MAX);
        assert_eq!(price_ceiling(pricier_catalog().records()), 50.0);
        assert_eq!(price_ceiling(&[]), PRICE_SLIDER_MAX);
    }

    #[test]
    fn reset_keeps_listings_priced_above_the_slider_maximum() {
        let catalog = pricier_catalog();
        let ceiling = price_ceiling(catalog.records());

        let defaults = FilterState::from_pairs_within(Vec::<(&str, &str)>::new(), ceiling);
        assert!(!defaults.has_active_filters());
        assert_eq!(query_catalog(catalog.records(), &defaults).len(), 6);

        let mut state = FilterState::from_pairs_within([("q", "x"), ("max_price", "30")], ceiling);
        assert!(state.has_active_filters());
        state.reset();
        assert!(!state.has_active_filters());
        assert_eq!(state.price_ceiling(), 50.0);
        let all: Vec<String> = catalog.records().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids(&query_catalog(catalog.records(), &state)), all);
        assert_eq!(state.href(), "/buy");
    }

    #[test]
    fn pain_relief_returns_paracetamol_only() {
        let catalog = catalog();
        let state = FilterState::from_pairs([("category", "Pain Relief")]);
        let out = query_catalog(catalog.records(), &state);
        assert_eq!(ids(&out), vec!["med-001"]);
        let price = discounted_price(out[0]);
        assert!((price - 6.7425).abs() < 1e-9);
        assert_eq!(format!("{price:.2}"), "6.74");
    }

    #[test]
    fn prescription_checkboxes_are_mutually_exclusive() {
        let mut state = FilterState::default();
        state.set_prescription_required(true);
        state.set_no_prescription_needed(true);
        assert!(!state.prescription_required());
        assert!(state.no_prescription_needed());

        state.set_prescription_required(true);
        assert!(state.prescription_required());
        assert!(!state.no_prescription_needed());

        // unchecking the inactive box is a no-op
        state.set_no_prescription_needed(false);
        assert!(state.prescription_required());
        state.set_prescription_required(false);
        assert_eq!(state.prescription(), PrescriptionFilter::Any);
    }

    #[test]
    fn later_query_checkbox_wins() {
        let state = FilterState::from_pairs([("rx", "1"), ("no_rx", "1")]);
        assert!(state.no_prescription_needed());
        assert!(!state.prescription_required());

        let state = FilterState::from_pairs([("no_rx", "on"), ("rx", "on")]);
        assert!(state.prescription_required());
    }

    #[test]
    fn search_is_case_insensitive_on_name_or_brand() {
        let catalog = catalog();
        let by_brand = FilterState::from_pairs([("q", "zyrTEC")]);
        assert_eq!(ids(&query_catalog(catalog.records(), &by_brand)), vec!["med-004"]);

        let by_name = FilterState::from_pairs([("q", "  omeprazole ")]);
        assert_eq!(ids(&query_catalog(catalog.records(), &by_name)), vec!["med-005"]);
    }

    #[test]
    fn price_bounds_use_discounted_price_inclusively() {
        let catalog = catalog();
        // Omeprazole lists at 18.99 but sells at 12.3435
        let state = FilterState::from_pairs([("min_price", "12.3"), ("max_price", "12.4")]);
        assert_eq!(ids(&query_catalog(catalog.records(), &state)), vec!["med-005"]);

        // Cetirizine sells at 7.992; a bound equal to the price keeps it
        let exact = discounted_price(catalog.find("med-004").unwrap());
        let state = FilterState {
            price_range: PriceRange::new(exact, exact),
            ..FilterState::default()
        };
        assert_eq!(ids(&query_catalog(catalog.records(), &state)), vec!["med-004"]);

        let state = FilterState::from_pairs([("min_price", "19"), ("max_price", "20")]);
        assert!(query_catalog(catalog.records(), &state).is_empty());
    }

    #[test]
    fn expiry_and_newest_orders() {
        let catalog = catalog();
        let expiry = FilterState::from_pairs([("sort", "expiry")]);
        assert_eq!(
            ids(&query_catalog(catalog.records(), &expiry)),
            vec!["med-003", "med-002", "med-005", "med-004", "med-001", "med-006"]
        );

        let newest = FilterState::from_pairs([("sort", "newest")]);
        assert_eq!(
            ids(&query_catalog(catalog.records(), &newest)),
            vec!["med-006", "med-005", "med-004", "med-003", "med-002", "med-001"]
        );
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let catalog = catalog();
        let state = FilterState::from_pairs([("category", "Homeopathy")]);
        assert!(query_catalog(catalog.records(), &state).is_empty());
        let state = FilterState::from_pairs([("category", ALL_CATEGORIES)]);
        assert_eq!(query_catalog(catalog.records(), &state).len(), 6);
    }

    #[test]
    fn query_string_round_trips_through_pairs() {
        let mut state = FilterState::from_pairs([
            ("q", "vitamin d"),
            ("category", "Vitamins"),
            ("min_price", "2"),
            ("max_price", "15"),
            ("no_rx", "1"),
            ("sort", "price-high"),
        ]);
        let qs = state.to_query_string();
        let parsed = FilterState::from_pairs(url::form_urlencoded::parse(qs.as_bytes()));
        assert_eq!(parsed, state);

        state.reset();
        assert_eq!(state.href(), "/buy");
    }

    #[test]
    fn swapped_bounds_are_normalised() {
        let state = FilterState::from_pairs([("min_price", "15"), ("max_price", "5")]);
        assert_eq!(state.price_range, PriceRange { min: 5.0, max: 15.0 });
    }
}
