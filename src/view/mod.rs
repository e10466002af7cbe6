pub mod card;
pub mod chart;
pub mod compare;
pub mod index;
pub mod team;
pub mod utils;
