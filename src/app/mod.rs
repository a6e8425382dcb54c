//! Core application logic: state, the store that mutates it, and effect dispatch.

pub mod action;
pub mod effect;
pub mod event;
pub mod handler;
pub mod runner;
pub mod state;
pub mod store;
