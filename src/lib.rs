//! # Fault Scenarios
//!
//! Runnable demonstrations of common runtime failures and how each one is
//! detected, classified, and reported without crashing the process.
//!
//! ## Scenarios Covered
//!
//! 1. **write-after-close** - appending to a released file handle
//! 2. **open-missing-file** - reading a path nobody created
//! 3. **read-past-end** - decoding an integer from an empty byte source
//! 4. **unreachable-endpoint** - connecting to a service that is not there
//! 5. **unknown-handler** - resolving a unit of code by a name nobody registered
//! 6. **divide-by-zero** - integer division with a zero divisor
//! 7. **absent-reference** - using a value that is absent
//! 8. **index-out-of-bounds** - indexing a fixed array past its length
//! 9. **incompatible-cast** - downcasting a type-erased value to the wrong type
//! 10. **unordered-input** - sorting entries when one sort key is missing
//! 11. **malformed-number** - parsing non-numeric text as an integer
//!
//! Each scenario is a pure function from no input to one classified
//! [`FaultError`]; the runner turns failures into [`FailureReport`] lines
//! and guarantees that nothing escapes the sequence.
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the classified error type
//! - `tempfile` - Scoped temp directories for the file scenarios
//! - `colored` - Console formatting in the demonstrator binary

pub mod error;
pub mod report;
pub mod scenarios;

pub use error::{FaultError, FaultKind};
pub use report::FailureReport;
pub use scenarios::{catalog, run_all, Scenario};
