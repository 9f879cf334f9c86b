#![doc = include_str!("../README.md")]

mod converter;
mod dispatch;
mod encode;
mod error;
mod partition;
mod types;
mod validate;

pub use crate::converter::*;
pub use crate::encode::*;
pub use crate::error::*;
pub use crate::partition::*;
pub use crate::types::*;
pub use crate::validate::*;
