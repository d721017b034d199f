use crate::Result;
use std::{collections::HashMap, io, path::Path};

/// Key/value pairs read from a `.env` file.
///
/// The file is only read into memory; the process environment is left
/// untouched. Lookups through [`EnvFile::var`] prefer the real environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Reads `path`. A missing file yields an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Parses `KEY=value` lines. Blank lines, `#` comments and lines
    /// without `=` are skipped; an `export ` prefix is allowed.
    pub fn parse(contents: &str) -> Self {
        let mut vars = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            vars.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { vars }
    }

    /// Value from the file only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value from the process environment, falling back to the file.
    pub fn var(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.get(key).map(str::to_string))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    // unquoted values may carry a trailing comment
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse() {
        let env = EnvFile::parse(
            r#"
# comment
OPENAI_API_KEY=sk-test
export MCP_PORT = 9000
MCP_HOST="0.0.0.0"
GREETING='hello # world'
TRAILING=value # note
EMPTY=
no_equals_sign
=orphan
"#,
        );

        assert_eq!(env.get("OPENAI_API_KEY"), Some("sk-test"));
        assert_eq!(env.get("MCP_PORT"), Some("9000"));
        assert_eq!(env.get("MCP_HOST"), Some("0.0.0.0"));
        assert_eq!(env.get("GREETING"), Some("hello # world"));
        assert_eq!(env.get("TRAILING"), Some("value"));
        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.get("no_equals_sign"), None);
        assert_eq!(env.len(), 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let env = EnvFile::load(dir.path().join(".env")).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MCP_TRANSPORT=stdio").unwrap();
        writeln!(file, "DEMO_MCP_ENV_FILE_ONLY_KEY=from-file").unwrap();

        let env = EnvFile::load(file.path()).unwrap();
        assert_eq!(env.get("MCP_TRANSPORT"), Some("stdio"));
        assert_eq!(
            env.var("DEMO_MCP_ENV_FILE_ONLY_KEY").as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn test_process_environment_wins() {
        let env = EnvFile::parse("PATH=/from/file");
        // PATH is set in any test environment
        assert_ne!(env.var("PATH").as_deref(), Some("/from/file"));
    }
}
