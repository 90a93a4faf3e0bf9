use salesdash_core::{
    config::PipelineConfig,
    filter::{filter, Selection, WorkingSet},
    generator,
    record::Dataset,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn dataset() -> (PipelineConfig, Dataset) {
    let config = PipelineConfig::default();
    let data = generator::generate(&config).unwrap();
    (config, data)
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Selecting the whole catalog on both dimensions returns every record.
#[test]
fn full_selection_returns_whole_dataset() {
    let (config, data) = dataset();
    let set = filter(&data, &Selection::all(&config));
    assert_eq!(set, WorkingSet::full(&data));
    assert_eq!(set.len(), data.len());
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let (_, data) = dataset();
    let sel = Selection::new(["Laptop", "Monitor"], ["Norte", "Centro"]);
    let once = filter(&data, &sel);
    let twice = once.refine(&sel);
    assert_eq!(once, twice);
}

/// AND across dimensions, OR within each.
#[test]
fn selection_is_a_membership_test() {
    let (_, data) = dataset();
    let sel = Selection::new(["mouse", "Teclado"], ["Sur"]);
    let set = filter(&data, &sel);

    assert!(!set.is_empty());
    for r in set.iter() {
        assert!(r.category == "mouse" || r.category == "Teclado", "leaked {}", r.category);
        assert_eq!(r.region, "Sur");
    }

    let expected = data
        .records()
        .iter()
        .filter(|r| (r.category == "mouse" || r.category == "Teclado") && r.region == "Sur")
        .count();
    assert_eq!(set.len(), expected, "filter dropped matching records");
}

/// An empty set on either dimension selects nothing, not everything.
#[test]
fn empty_dimension_selects_nothing() {
    let (config, data) = dataset();
    let no_regions = Selection::new(config.categories.clone(), Vec::<String>::new());
    let no_categories = Selection::new(Vec::<String>::new(), config.regions.clone());

    assert!(filter(&data, &no_regions).is_empty());
    assert!(filter(&data, &no_categories).is_empty());
    assert!(filter(&data, &Selection::default()).is_empty());
}

#[test]
fn unknown_labels_match_nothing() {
    let (_, data) = dataset();
    let sel = Selection::new(["Tablet"], ["Norte"]);
    assert!(filter(&data, &sel).is_empty());
}

/// The working set borrows from the dataset; nothing is copied.
#[test]
fn working_set_rows_point_into_dataset() {
    let (config, data) = dataset();
    let set = filter(&data, &Selection::all(&config));
    let first = set.rows()[0];
    assert!(std::ptr::eq(first, &data.records()[0]));
}
