#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod deque;
mod queue;

// -----------------------------------------------------------------------------
// Exports

pub use deque::Deque;
pub use queue::Queue;
