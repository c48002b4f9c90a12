/// Task statement opening every translation prompt.
pub const TASK_INSTRUCTION: &str = "Convert the following natural language question into a SQL query. \
     Only provide the SQL query as the output, ensure the resulting columns have well described names:";

pub const SCHEMA_LABEL: &str = "Database schema:";

pub const DATE_INSTRUCTION: &str =
    "Consider dates given (if a date is given in a formal manner, read it as ISO 8601):";

/// Assembles the single prompt sent to every provider.
///
/// The question, schema and date hint are embedded verbatim.
pub fn build_query_prompt(question: &str, schema: &str, date_hint: &str) -> String {
    [
        TASK_INSTRUCTION,
        question,
        SCHEMA_LABEL,
        schema,
        DATE_INSTRUCTION,
        date_hint,
    ]
    .join(" ")
}
