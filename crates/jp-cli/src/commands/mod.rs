//! CLI command implementations

pub(crate) mod aggregate;
pub(crate) mod common;
pub(crate) mod join;
pub(crate) mod resolve;
pub(crate) mod update;
