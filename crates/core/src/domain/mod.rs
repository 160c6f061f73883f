pub mod answer;
pub mod product;
pub mod profile;
pub mod question;
