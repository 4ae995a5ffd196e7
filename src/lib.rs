//! The library code for the `gen-blog` static blog generator. A run is a
//! straight, single-threaded pipeline:
//!
//! 1. Collecting dated posts from the input directory ([`crate::post`])
//! 2. Ordering them oldest first and grouping them into pages
//!    ([`crate::page`])
//! 3. Rendering each page into a styled HTML document, pagination footer
//!    included, and writing it to disk ([`crate::write`])
//!
//! Because the number of pages is known before anything is written, every
//! output file is written exactly once. [`crate::build::build_site`] stitches
//! the steps together.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod footer;
pub mod markdown;
pub mod page;
pub mod post;
pub mod write;
