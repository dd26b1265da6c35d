// Standard library
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

// 3rd party crates
use tracing::{debug, warn};

// Project imports
use crate::settings::types::Targets;

// Current module imports
use super::errors::TargetsError;
use super::types::ServerId;

/// Parses a servers file: one identifier per line, `#` starts a comment.
pub fn parse_server_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the ordered server list from inline servers followed by the
/// servers file, if one is configured.
///
/// Relative `servers_file` paths resolve against `base_dir`, which is the
/// directory holding the configuration file. Duplicates keep their first
/// position.
pub fn load_servers(targets: &Targets, base_dir: &Path) -> Result<Vec<ServerId>, TargetsError> {
    let mut raw: Vec<String> = targets
        .servers
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(file) = &targets.servers_file {
        let path: PathBuf = if file.is_absolute() {
            file.clone()
        } else {
            base_dir.join(file)
        };
        let contents = fs::read_to_string(&path).map_err(|source| TargetsError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let from_file = parse_server_list(&contents);
        debug!(path = ?path, count = from_file.len(), "Loaded servers file");
        raw.extend(from_file);
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut servers: Vec<ServerId> = Vec::with_capacity(raw.len());
    for server in raw {
        if !seen.insert(server.clone()) {
            warn!(server = %server, "Duplicate server in list, probing it once");
            continue;
        }
        servers.push(ServerId::new(server));
    }

    Ok(servers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_list_skips_blanks_and_comments() {
        let contents = "host1.api.com:8081\n\n# staging\n  host2.api.com  \nhost3 # trailing\n";
        assert_eq!(
            parse_server_list(contents),
            vec!["host1.api.com:8081", "host2.api.com", "host3"]
        );
    }

    #[test]
    fn test_parse_server_list_ignores_trailing_newline() {
        assert_eq!(parse_server_list("a\nb\n"), vec!["a", "b"]);
        assert!(parse_server_list("").is_empty());
    }

    #[test]
    fn test_load_servers_merges_inline_and_file_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("servers"), "b.example.com\na.example.com:8080\n")
            .expect("write servers file");

        let targets = Targets {
            servers: vec!["a.example.com:8080".to_string(), "c.example.com".to_string()],
            servers_file: Some(PathBuf::from("servers")),
        };

        let servers = load_servers(&targets, dir.path()).expect("load servers");
        let names: Vec<&str> = servers.iter().map(ServerId::as_str).collect();
        assert_eq!(names, vec!["a.example.com:8080", "c.example.com", "b.example.com"]);
    }

    #[test]
    fn test_load_servers_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let targets = Targets {
            servers: Vec::new(),
            servers_file: Some(PathBuf::from("does-not-exist")),
        };

        match load_servers(&targets, dir.path()) {
            Err(TargetsError::ReadFile { path, .. }) => {
                assert_eq!(path, dir.path().join("does-not-exist"))
            }
            other => panic!("Expected TargetsError::ReadFile, got {other:?}"),
        }
    }

    #[test]
    fn test_load_servers_empty_is_allowed() {
        let targets = Targets::default();
        let servers = load_servers(&targets, Path::new(".")).expect("load servers");
        assert!(servers.is_empty());
    }
}
