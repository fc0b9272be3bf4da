//! Domain layer - Pure computational logic
//!
//! Every transform here is a pure function of its already-parsed input.

pub mod bills;
pub mod digits;
pub mod duel;
pub mod letters;
pub mod magnets;
pub mod parity;
pub mod place_value;
pub mod queue;
pub mod square_pair;
pub mod word_case;
