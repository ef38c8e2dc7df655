//! Solutions to two small array puzzles, plus a runner that checks them
//! against TOML or JSON case files.
//!
//! - [`find_the_prefix_common_array`]: running count of values shared by
//!   the prefixes of two equal-length arrays.
//! - [`is_array_special`]: whether neighbouring elements always alternate
//!   between odd and even.

pub mod casebook;
pub mod error;
pub mod prefix_common;
pub mod report;
pub mod special_array;

pub use casebook::{run_cases, CaseFile, RunSummary, Settings};
pub use error::{CaseFileError, InputError};
pub use prefix_common::{find_the_prefix_common_array, prefix_common_reference};
pub use report::ReportFormatter;
pub use special_array::{first_parity_break, is_array_special, is_odd};
