//! Small coffee-shop model whose `Display` impls are written by reprgen at
//! build time.

include!(concat!(env!("OUT_DIR"), "/reprgen.rs"));

pub mod menu;
pub mod orders;
