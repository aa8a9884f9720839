mod character;
mod course;

pub use {character::*, course::*};
