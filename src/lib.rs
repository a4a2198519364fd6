#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod element;
mod stack;

pub use config::{INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTE_SIZE};
pub use element::Element;
pub use stack::{Stack, StackError, StackResult};
