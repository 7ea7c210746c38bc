//! Provides abstractions over the APIs of various system components

pub mod command;
