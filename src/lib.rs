//! fuzzyhash: context-triggered piecewise hashing (ssdeep/SpamSum-compatible
//! fuzzy hashes) in Rust.
//!
//! The crate provides:
//! - A rolling trigger hash and piecewise FNV block hasher (`hash`)
//! - Digest parsing and run-stripping normalization (`digest`)
//! - A similarity scorer for comparing two digests (`compare`)
//! - File-oriented helpers (`io`)
//! - The three public operations the format is built around (`engine`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use fuzzyhash::engine::{hash, compare};
//!
//! let a = hash(&b"hello old world"[..]).unwrap();
//! let b = hash(&b"hello new world"[..]).unwrap();
//! let score = compare(&a, &b).unwrap();
//! assert!(score <= 100);
//! ```

pub mod compare;
pub mod digest;
pub mod engine;
pub mod hash;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;
