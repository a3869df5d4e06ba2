//! Drill-down navigation over the MCU fixture, feeding each level into the
//! layout pipeline the way a renderer would.

use memlayout::{compute_layout, DrillDownNavigator, Layer, LayoutConfig};

use crate::common::{mcu_tree, region_ids};

#[test]
fn drill_down_round_trip() {
    let tree = mcu_tree();
    let mut nav = DrillDownNavigator::new(tree.clone());

    assert!(nav.select(1));
    assert_eq!(nav.layer(), Layer::Sections);
    assert!(nav.select(10));
    assert_eq!(nav.layer(), Layer::Symbols);

    assert!(nav.back());
    assert!(nav.back());
    assert_eq!(nav.layer().number(), 1);
    assert_eq!(region_ids(nav.current_data()), region_ids(&tree));
    assert!(nav.parent_layer().is_none());
}

#[test]
fn empty_children_is_noop() {
    let mut nav = DrillDownNavigator::new(mcu_tree());
    nav.select(1);
    let before = nav.snapshot();

    // .rodata has no symbols
    assert!(!nav.select(11));
    assert_eq!(nav.snapshot(), before);
}

#[test]
fn clicking_an_unused_region_is_ignored() {
    let config = LayoutConfig::default();
    let mut nav = DrillDownNavigator::new(mcu_tree());
    let matrix = compute_layout(nav.current_data(), &config);
    let gap = matrix[0].iter().find(|r| r.is_unused()).unwrap().clone();

    assert!(!nav.select_laid_out(&gap));
    assert_eq!(nav.layer(), Layer::Segments);

    let flash = matrix[0].iter().find(|r| r.id == 1).unwrap().clone();
    assert!(nav.select_laid_out(&flash));
    assert_eq!(nav.layer(), Layer::Sections);
}

#[test]
fn each_level_lays_out() {
    let config = LayoutConfig::default();
    let mut nav = DrillDownNavigator::new(mcu_tree());
    assert!(!compute_layout(nav.current_data(), &config).is_empty());

    nav.select(1);
    let sections = compute_layout(nav.current_data(), &config);
    assert_eq!(sections.len(), 1);

    nav.select(10);
    let symbols = compute_layout(nav.current_data(), &config);
    let real: Vec<u32> = symbols[0]
        .iter()
        .filter(|r| !r.is_unused())
        .map(|r| r.id)
        .collect();
    assert_eq!(real, vec![100, 101, 102]);
}

#[test]
fn breadcrumb_labels_follow_the_path() {
    let mut nav = DrillDownNavigator::new(mcu_tree());
    assert_eq!(nav.breadcrumb_label(), "Segments");
    nav.select(1);
    assert_eq!(nav.breadcrumb_label(), "Sections for Segment \"1 - LOAD\"");
    nav.select(10);
    assert_eq!(nav.breadcrumb_label(), "Symbols for Section \".text\"");
    nav.reset();
    assert_eq!(nav.layer(), Layer::Segments);
    assert_eq!(nav.breadcrumb_label(), "Segments");
}

#[test]
fn fresh_snapshot_keeps_valid_path() {
    let mut nav = DrillDownNavigator::new(mcu_tree());
    nav.select(3);
    nav.replace_tree(mcu_tree());
    assert_eq!(nav.layer(), Layer::Sections);
    assert_eq!(region_ids(nav.current_data()), vec![30, 31]);
}
