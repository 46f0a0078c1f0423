#![no_std]
#![warn(missing_docs)]

//! A growable ring-buffer deque, plus a handful of stateless sequence helpers.

extern crate alloc;

pub mod algo;
pub mod deque;
pub mod error;
mod storage;

pub use crate::deque::{DequeConfig, RingDeque, DEFAULT_CAPACITY};
pub use crate::error::DequeError;
