//! End-to-end tests of the layout pipeline and drill-down navigation.

mod navigation;
mod properties;
