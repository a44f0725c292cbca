//! Column classification and dataset validation.
//!
//! [`classify`] labels each column of a DataFrame; [`validate`] turns that
//! labelling into a pass/fail verdict with human-readable reasons.
//!
//! ```ignore
//! let classification = fin_validate::classify(&df);
//! let result = fin_validate::validate(&df, &classification);
//! if !result.is_valid() {
//!     eprintln!("{}", result.summary());
//! }
//! ```

mod schema;
mod validator;

pub use schema::{classify, classify_column, classify_with_options};
pub use validator::{validate, validate_with_options};
