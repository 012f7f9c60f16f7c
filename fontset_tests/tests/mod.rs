// Copyright 2025 the Fontset Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `fontset`.
//!
//! - The `util` module contains the shared registry test double used by the
//!   scenario tests.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easier to share utilities between test modules.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
