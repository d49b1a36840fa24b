pub mod constraint;
pub mod entity;
