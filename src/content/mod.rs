// Static site content compiled into the binary.

pub mod articles;
pub mod portfolio;
