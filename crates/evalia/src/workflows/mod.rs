pub mod roster;
pub mod screening;
