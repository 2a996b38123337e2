// crates/bundle-report/src/lib.rs
// Static size report for a built front-end bundle (dist/)

pub mod assets;
pub mod error;
pub mod report;

pub use assets::{Asset, AssetKind};
pub use error::{ReportError, Result};
pub use report::{generate, Report, ReportMode, ReportOptions};
