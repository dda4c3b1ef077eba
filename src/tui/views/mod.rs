pub mod file_prompt;
pub mod wizard;
