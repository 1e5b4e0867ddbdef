//! Anchors module - Heading anchors of markdown documents
//!
//! A heading `## What’s New?` is addressable as `doc.md#whats-new`.

pub mod index;
pub mod slug;
