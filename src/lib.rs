//! Karmic Matrix - Numerology Web Application
//!
//! This crate derives a user's karmic numbers from a birth date and serves
//! them with interpretive text across three map variants.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
