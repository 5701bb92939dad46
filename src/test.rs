/// Check for equality between two components allowing for errors below the
/// one decimal place colors are rounded to.
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-4);
    }};
}

pub(crate) use assert_component_eq;
