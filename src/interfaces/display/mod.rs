pub mod currency;
pub mod view;
