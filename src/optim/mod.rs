pub mod sgd;

pub use sgd::{Sgd, LEARNING_RATE};
