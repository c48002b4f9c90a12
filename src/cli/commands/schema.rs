use crate::dataset::SCHEMA_DESCRIPTION;

/// Prints the schema description that goes into every prompt.
pub fn print_schema() {
    println!("{SCHEMA_DESCRIPTION}");
}
