pub use cards::{CardView, CardsTemplate, CategoryOption, ListingTemplate};

pub mod admin;
pub mod detail;
pub mod format;
pub mod fragments;

mod cards;
