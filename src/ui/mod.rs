pub mod name_prompt;
pub mod panels;
