// Copyright 2026 Exprline Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared pieces of the `exprline` command.
//!
//! The session loop and diagnostic rendering live here so integration
//! tests can drive them over in-memory buffers instead of a spawned
//! process.

pub mod diagnostic;
pub mod session;
