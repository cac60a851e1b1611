//! # Domain Models
//!
//! This crate contains the pure types every bridge crate agrees on: native element
//! capabilities, action kinds, coded errors, and configuration.
//! Keep it lean: no I/O, no threading, no dispatch logic. Just data and simple helpers.

pub mod action;
pub mod coded;
pub mod config;
pub mod element;
