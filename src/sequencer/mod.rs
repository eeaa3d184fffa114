pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod schedule;
pub(crate) mod simulate;
