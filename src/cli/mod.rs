//! Terminal frontend modules

pub mod play;
