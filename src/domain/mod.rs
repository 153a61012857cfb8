pub mod markup;
pub mod narration;
