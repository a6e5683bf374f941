pub mod band;
pub mod bsa;
pub mod measurement;
pub mod thresholds;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
