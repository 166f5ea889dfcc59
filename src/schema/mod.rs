pub mod indexes;
pub mod validators;
