pub(crate) mod decode;
pub(crate) mod frames;
pub(crate) mod video;
