pub mod health;
pub mod markup;
