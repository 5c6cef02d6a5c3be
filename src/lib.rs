pub mod config;
pub mod events;
pub mod geometry;
pub mod gui;
pub mod rotation;
pub mod selection;
pub mod sys;
pub mod zodiac;
