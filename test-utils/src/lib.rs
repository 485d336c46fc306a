//! Wolfbot Test Utils
//!
//! Provides shared testing utilities for the wolfbot adapter. The adapter converts
//! Serenity objects into its own domain models at the platform boundary, and the
//! factories here build those Serenity objects without a live Discord connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn converts_member() {
//!     let member = create_test_member(1000, 5000, "wolfy", None, &[10]);
//!     let role = create_test_role(10, "Players", 1);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
