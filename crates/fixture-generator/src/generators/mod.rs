//! Individual value generators for the fields of a user record.
//!
//! Every function takes the RNG explicitly so the caller decides whether
//! output is reproducible (seeded `StdRng`) or not (entropy-seeded).

pub mod numeric;
pub mod string;
pub mod timestamp;
