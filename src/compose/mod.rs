pub(crate) mod compositor;
pub(crate) mod pixel;
pub(crate) mod sample;
pub(crate) mod surface;
