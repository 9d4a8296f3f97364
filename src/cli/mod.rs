//! CLI infrastructure for the go-diagram toolkit
//!
//! This module provides the command-line interface for recording small game
//! trees, working with treepaths, choosing crop regions and flattening
//! positions into diagram snapshots.

pub mod commands;
pub mod config;
pub mod output;
