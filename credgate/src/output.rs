//! Rendering of the registration payload for the host.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use crate::gate::PasswordLessLogin;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The encoded hash on a single line.
    #[default]
    Plain,
    /// `{"password_hash": "..."}`
    Json,
    /// A PHP file that registers the login plugin.
    Php,
}

pub fn render(gate: &PasswordLessLogin, format: OutputFormat) -> Result<String, serde_json::Error> {
    let hash = gate.password_hash().as_str();
    let rendered = match format {
        OutputFormat::Plain => format!("{hash}\n"),
        OutputFormat::Json => format!("{}\n", serde_json::to_string(gate)?),
        OutputFormat::Php => format!(
            "<?php\nrequire_once '{}';\nreturn new {}('{}');\n",
            PasswordLessLogin::PLUGIN_PATH,
            PasswordLessLogin::PLUGIN_CLASS,
            php_single_quoted(hash)
        ),
    };
    Ok(rendered)
}

/// Escapes a value for a single-quoted PHP string literal.
fn php_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Writes `contents` to `path`, readable by the owner only on Unix.
pub fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())?;

    // An existing file keeps its old mode through open(); tighten it explicitly.
    #[cfg(unix)]
    {
        let mut permissions = file.metadata()?.permissions();
        permissions.set_mode(0o600);
        fs::set_permissions(path, permissions)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{php_single_quoted, render, write_private, OutputFormat};
    use crate::gate::{AuthGate, HashedCredential, PasswordLessLogin};
    use std::fs;
    use tempfile::tempdir;

    fn gate() -> PasswordLessLogin {
        PasswordLessLogin::from_password_hash(HashedCredential::new("$2y$04$abc".to_string()))
    }

    #[test]
    fn renders_plain_hash() {
        assert_eq!(render(&gate(), OutputFormat::Plain).unwrap(), "$2y$04$abc\n");
    }

    #[test]
    fn renders_json_object() {
        let rendered = render(&gate(), OutputFormat::Json).unwrap();
        assert_eq!(rendered, "{\"password_hash\":\"$2y$04$abc\"}\n");
    }

    #[test]
    fn renders_php_registration() {
        let rendered = render(&gate(), OutputFormat::Php).unwrap();
        assert!(rendered.starts_with("<?php\n"));
        assert!(rendered.contains("require_once 'plugins/login-password-less.php';"));
        assert!(rendered.contains("return new AdminerLoginPasswordLess('$2y$04$abc');"));
    }

    #[test]
    fn escapes_php_quotes() {
        assert_eq!(php_single_quoted(r"a'b\c"), r"a\'b\\c");
    }

    #[test]
    fn writes_output_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("login.php");
        write_private(&path, "payload").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "payload");
    }

    #[cfg(unix)]
    #[test]
    fn output_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("credential");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_private(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
