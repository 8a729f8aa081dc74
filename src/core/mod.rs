//! Core library components.
//!
//! This module contains the reusable logic for resolving secrets file
//! paths, running the streaming cipher pipeline, and the pre-deploy
//! existence guard. Every operation is a self-contained, stateless
//! transaction over the filesystem; nothing here holds state between
//! calls.

pub mod cipher;
pub mod guard;
pub mod paths;
