//! Configuration module for tabtip-win
//!
//! Concentrates the fixed paths, registry locations, window constants and
//! timings the controller works with. Defaults reproduce the values the touch
//! keyboard actually uses; tests and hosts override the timings.

pub mod keyboard;

pub use keyboard::{Hive, RegistryKey, TabTipConfig};
