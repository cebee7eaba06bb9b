//! Test support library
//! Shared configurations and helpers for the integration tests.

#![allow(dead_code)]

use chainmail::{
    Config,
    float_types::Real,
    scaffold::{SupportElement, SupportKind, SupportSet},
};

/// Route `tracing` output through the test harness; `RUST_LOG=debug` shows it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 10 mm rings of 2 mm wire on a `cols × rows × stacks` grid, everything enabled.
pub fn config(cols: i32, rows: i32, stacks: i32) -> Config {
    Config::default().with_grid(cols, rows, stacks)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Elements of one kind, in synthesis order.
pub fn of_kind(set: &SupportSet, kind: SupportKind) -> Vec<SupportElement> {
    set.iter().filter(|e| e.kind() == kind).copied().collect()
}

/// Every combination of the three scaffold toggles.
pub fn toggle_combinations(base: &Config) -> Vec<Config> {
    let mut out = Vec::new();
    for bits in 0..8u8 {
        out.push(Config {
            add_base_plate_and_supports: bits & 1 != 0,
            add_support_joiners: bits & 2 != 0,
            add_side_walls: bits & 4 != 0,
            ..base.clone()
        });
    }
    out
}
