//! Natural language to SQL: prompt assembly, fence cleanup and the service
//! that wraps the selected provider.

mod fence;
mod prompt;
mod service;

pub use fence::strip_code_fences;
pub use prompt::build_query_prompt;
pub use service::{QueryTranslator, TranslationOutcome};
