//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `newsnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("newsnote_core ping={}", newsnote_core::ping());
    println!("newsnote_core version={}", newsnote_core::core_version());
}
