#[cfg_attr(test, macro_use)]
extern crate approx;

/// The `heredity` module contains functionality related to heritable traits and
/// their evaluation against selection pressures.
pub mod heredity;
