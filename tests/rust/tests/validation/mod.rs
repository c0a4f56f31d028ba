//! Validation integration tests
//!
//! Document-level behaviour of the validator: partitioning of malformed
//! entries, default resolution, and the distinct failure kinds.

mod partition;
