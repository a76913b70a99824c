//! Core library for Hoot
//!
//! Chat transcript and completion client on one side, the flappy-owl
//! simulation on the other. Nothing in here touches the terminal; the TUI
//! in `hoot-cli` drives both halves and renders them.

pub mod ai;
pub mod chat;
pub mod config;
pub mod game;
