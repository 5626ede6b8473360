//! Application services orchestrating the store and the domain.

pub mod games;
