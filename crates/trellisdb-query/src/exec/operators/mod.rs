//! Concrete operator implementations.
//!
//! This module contains the implementations of all physical operators.
//!
//! # Operator Categories
//!
//! - **Scan operators**: [`scan`]: table and index scans
//! - **Filter operators**: [`filter`]: predicate evaluation
//! - **Project operators**: [`project`]: column projection
//! - **Join operators**: [`join`]: nested-loop equi-join
//! - **Sort operators**: [`sort`]: in-memory sorting
//! - **Duplicate elimination**: [`unique`]: adjacent-duplicate removal

pub mod filter;
pub mod join;
pub mod project;
pub mod scan;
pub mod sort;
pub mod unique;


// Re-exports for convenience
pub use filter::{RowPredicate, SelectOp};
pub use join::NestedLoopJoinOp;
pub use project::ProjectOp;
pub use scan::{IndexScanOp, TableScanOp};
pub use sort::SortOp;
pub use unique::UniqueOp;
