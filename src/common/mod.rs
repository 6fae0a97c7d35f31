mod fs;
mod markup;

pub(crate) use fs::*;
pub(crate) use markup::*;
