// Internal macros used by the tola-reflect crate itself

pub mod peano;
