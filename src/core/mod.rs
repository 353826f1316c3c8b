pub mod article;
pub mod bank;
pub mod composer;
pub mod deck;
pub mod draw;
