pub(crate) mod canvas;
pub(crate) mod plan;
pub(crate) mod style;
