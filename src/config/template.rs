//! Configuration template generation.

use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    ///
    /// The values in the template are the built-in defaults, so a freshly
    /// generated config changes nothing until edited.
    pub fn generate_template() -> String {
        r#"# srccat Configuration File
# Place this file as .srccat.yaml in your project root
#
# Command-line flags override anything set here.

# Root directories to search, in order
roots:
  - ./app
  - ./components
  - ./lib
  - ./services

# Output file path
output: aggregated_code.txt

# Accepted filename suffixes (case-sensitive suffix match on the file name,
# so `.ts` also matches `foo.d.ts`)
suffixes:
  - .ts
  - .tsx

# Header prefix written before each relative path. The same prefix is used
# for every root, whichever root a file came from.
prefix: app/
"#
        .to_string()
    }
}
