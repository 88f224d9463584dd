//! Demo page modules.

pub mod gallery;
