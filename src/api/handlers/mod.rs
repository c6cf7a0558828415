pub mod countdown;
pub mod root;
