#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use lq_collections as collections;

pub use lq_collections::{Deque, Queue};
