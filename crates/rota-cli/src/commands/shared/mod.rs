pub mod overrides;
pub mod parse;
