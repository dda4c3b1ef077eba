//! Property-based tests for the Arcadia character wizard
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `allocator_props`: point allocation
//!   - Pool totals never exceed their budget
//!   - No skill exceeds its ceiling
//!   - Choosing a knowledge zeroes the specialized pool over its skill list
//!
//! - `sequencer_props`: step navigation
//!   - Retreat is the exact inverse of advance
//!   - Hidden steps are never entered
//!   - Progress markers keep nominal numbering
//!
//! - `codec_props`: JSON interchange
//!   - Export then import reproduces the record
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod allocator_props;
mod codec_props;
mod sequencer_props;
