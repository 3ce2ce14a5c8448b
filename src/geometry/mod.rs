pub(crate) mod fit;
pub(crate) mod matrix;
pub(crate) mod rect;
