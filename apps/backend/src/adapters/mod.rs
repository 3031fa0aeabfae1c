pub mod cards_sea;
