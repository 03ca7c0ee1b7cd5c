pub use intake_utils_derive::trace_instrument;

mod macros;

/// Returns the version of the intake workspace.
pub fn intake_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
