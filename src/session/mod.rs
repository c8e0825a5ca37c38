pub(crate) mod display;
pub(crate) mod player;
pub(crate) mod zoom;
