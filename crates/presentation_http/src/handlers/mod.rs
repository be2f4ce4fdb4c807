//! HTTP handlers

pub mod conversar;
pub mod status;
