pub mod card;
pub mod sequence;
