#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("completiongen").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        println!("CLI Help Output:\n{}", help_output);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));
        assert!(help_output.contains("completiongen"));

        for option in ["--shell", "--spec", "--out", "--force", "--name", "--verbose"] {
            assert!(help_output.contains(option), "help lacks {}", option);
        }

        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));
    }

    #[test]
    fn test_cli_version_output() {
        let mut cmd = Command::cargo_bin("completiongen").unwrap();
        let assert_result = cmd.arg("--version").assert().success();
        let output = String::from_utf8_lossy(&assert_result.get_output().stdout).to_string();

        assert!(output.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_missing_arguments_is_usage_error() {
        let mut cmd = Command::cargo_bin("completiongen").unwrap();
        cmd.arg("--shell").arg("bash").assert().code(exitcode::USAGE);
    }
}
