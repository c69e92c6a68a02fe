//! GitHub Actions step outputs
//!
//! The runner exposes a file through `$GITHUB_OUTPUT`; every `key=value`
//! line appended to it becomes a step output. Without the variable the
//! lines go to stdout, which keeps local runs inspectable.

use std::fs::OpenOptions;
use std::io::Write;

use crate::action::Decision;

/// Environment variable naming the step output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Renders the four step outputs as `key=value` lines. Booleans render
/// as the literal strings `true` and `false`.
pub fn render(decision: &Decision) -> String {
    format!(
        "from_version={}\nto_version={}\nis_upgraded_version={}\nis_release_beta={}\n",
        decision.from_version,
        decision.to_version,
        decision.is_upgraded_version,
        decision.is_release_beta,
    )
}

/// Publishes the outputs to the runner's output file, or to stdout when
/// running outside of a runner.
pub fn publish(decision: &Decision) -> std::io::Result<()> {
    let rendered = render(decision);

    match std::env::var_os(GITHUB_OUTPUT_ENV) {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(rendered.as_bytes())?;
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::semver::Version;
    use serial_test::serial;
    use tempfile::TempDir;

    fn decision() -> Decision {
        Decision {
            from_version: "1.2.0".parse().unwrap(),
            to_version: "1.3.0-beta.1".parse().unwrap(),
            is_upgraded_version: true,
            is_release_beta: true,
        }
    }

    #[test]
    fn render_emits_one_line_per_output() {
        assert_eq!(
            render(&decision()),
            "from_version=1.2.0\n\
             to_version=1.3.0-beta.1\n\
             is_upgraded_version=true\n\
             is_release_beta=true\n"
        );
    }

    #[test]
    fn render_uses_literal_booleans() {
        let decision = Decision {
            from_version: Version::ZERO,
            to_version: "0.1.0".parse().unwrap(),
            is_upgraded_version: true,
            is_release_beta: false,
        };

        let rendered = render(&decision);
        assert!(rendered.contains("is_upgraded_version=true"));
        assert!(rendered.contains("is_release_beta=false"));
    }

    #[test]
    #[serial]
    fn publish_appends_to_the_runner_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("outputs");
        std::fs::write(&path, "previous=kept\n").unwrap();

        unsafe { std::env::set_var(GITHUB_OUTPUT_ENV, &path) };
        let result = publish(&decision());
        unsafe { std::env::remove_var(GITHUB_OUTPUT_ENV) };
        result.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous=kept\n"));
        assert!(contents.contains("to_version=1.3.0-beta.1"));
        assert!(contents.contains("is_release_beta=true"));
    }

    #[test]
    #[serial]
    fn publish_creates_the_output_file_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("outputs");

        unsafe { std::env::set_var(GITHUB_OUTPUT_ENV, &path) };
        let result = publish(&decision());
        unsafe { std::env::remove_var(GITHUB_OUTPUT_ENV) };
        result.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("from_version=1.2.0\n"));
    }
}
