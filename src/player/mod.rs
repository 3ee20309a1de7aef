//! Player entities of the two demos.

pub mod jumper;
pub mod walker;

pub use jumper::Jumper;
pub use walker::Walker;
