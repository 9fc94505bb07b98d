#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
