//! Account file loading
//!
//! One raw credential per line; surrounding whitespace is trimmed and
//! blank lines are dropped.

use matchfarm_core::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read the account file, failing when it holds no usable line
pub async fn load_accounts(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await?;
    let accounts = parse_accounts(&content);

    if accounts.is_empty() {
        return Err(Error::NoAccounts(path.display().to_string()));
    }

    debug!("Read {} account lines from {}", accounts.len(), path.display());
    Ok(accounts)
}

pub fn parse_accounts(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_lines_dropped() {
        let accounts = parse_accounts("user=a\n\n   \r\n  user=b  \r\n");
        assert_eq!(accounts, vec!["user=a", "user=b"]);
    }

    #[tokio::test]
    async fn test_load_accounts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user=first\n\nuser=second").unwrap();

        let accounts = load_accounts(file.path()).await.unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n   \n").unwrap();

        let err = load_accounts(file.path()).await.unwrap_err();
        assert!(matches!(err, Error::NoAccounts(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_accounts(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
