//! Prompt templates for the council stages

mod template;

pub use template::PromptTemplate;
