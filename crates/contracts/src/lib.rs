//! Domain types and derived calculations shared by the workshop front-end.

pub mod domain;
pub mod enums;
pub mod seed;
pub mod shared;
