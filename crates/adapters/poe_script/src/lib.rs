//! # poegate-adapter-poe-script
//!
//! Power tool adapter — drives the PoE control script as a subprocess and
//! turns its text output into [`Device`] records.
//!
//! ## How it works
//!
//! Every port call spawns the script once with the flags described in
//! [`ToolCommand`], waits for it to exit, and parses stdout with the pure
//! functions in [`parser`]. Nothing is cached between calls.
//!
//! The child is spawned with `kill_on_drop`, so a request that times out (or
//! whose handler is dropped) does not leave the script running.
//!
//! ## Exit status
//!
//! By default a non-zero exit status is logged and otherwise ignored, which
//! keeps the fire-and-forget behaviour of the script. With
//! [`PoeScriptConfig::check_exit_status`] it becomes a
//! [`ToolFailure::NonZeroExit`](poegate_domain::error::ToolFailure) error.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `poegate-app` and `poegate-domain`.

mod command;
mod config;
mod error;
pub mod parser;

pub use command::ToolCommand;
pub use config::PoeScriptConfig;
pub use error::{LineParseError, ListingParseError, PoeScriptError};

use std::process::Stdio;

use tokio::process::Command;

use poegate_app::ports::PowerController;
use poegate_domain::device::Device;
use poegate_domain::error::PoeGateError;
use poegate_domain::id::DeviceId;
use poegate_domain::power::PowerState;

/// [`PowerController`] backed by the PoE control script.
pub struct PoeScript {
    config: PoeScriptConfig,
}

impl PoeScript {
    /// Create a new adapter with the given configuration.
    #[must_use]
    pub fn new(config: PoeScriptConfig) -> Self {
        Self { config }
    }

    /// The configuration this adapter runs with.
    #[must_use]
    pub fn config(&self) -> &PoeScriptConfig {
        &self.config
    }

    /// Run one command to completion and return its stdout.
    async fn run(&self, command: ToolCommand) -> Result<String, PoeScriptError> {
        let args = command.args();
        tracing::debug!(
            program = %self.config.program.display(),
            prefix = ?self.config.args,
            ?args,
            "running power tool"
        );

        let child = Command::new(&self.config.program)
            .args(&self.config.args)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PoeScriptError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        let output = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| PoeScriptError::Timeout { after: limit })?,
            None => child.wait_with_output().await,
        }
        .map_err(PoeScriptError::Io)?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim_end();
        if !output.status.success() {
            if self.config.check_exit_status {
                tracing::warn!(
                    status = %output.status,
                    stderr,
                    ?command,
                    "power tool exited unsuccessfully"
                );
                return Err(PoeScriptError::ExitStatus {
                    status: output.status,
                    stderr: stderr.to_string(),
                });
            }
            tracing::warn!(
                status = %output.status,
                stderr,
                ?command,
                "power tool exited unsuccessfully, ignoring"
            );
        } else if !stderr.is_empty() {
            tracing::debug!(stderr, ?command, "power tool wrote to stderr");
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

impl PowerController for PoeScript {
    async fn list_devices(&self) -> Result<Vec<Device>, PoeGateError> {
        let stdout = self.run(ToolCommand::List).await?;
        let devices = parser::parse_listing(&stdout).map_err(PoeScriptError::from)?;
        Ok(devices)
    }

    async fn query_device(&self, id: DeviceId) -> Result<Option<Device>, PoeGateError> {
        let stdout = self.run(ToolCommand::Query(id)).await?;
        let device = parser::parse_query(&stdout).map_err(PoeScriptError::from)?;
        Ok(device)
    }

    async fn set_power(&self, id: DeviceId, state: PowerState) -> Result<(), PoeGateError> {
        self.run(ToolCommand::set_power(id, state)).await?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use poegate_domain::error::{ToolError, ToolFailure};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const FAKE_POE: &str = r#"
case "$1" in
  -c)
    if [ "$2" = "-p" ]; then
      case "$3" in
        1) echo "1 Up node-1" ;;
        2) echo "2 Down node-2" ;;
      esac
    else
      echo "1 Up node-1"
      echo "2 Down node-2"
      echo "3 Up node-3"
    fi
    ;;
  -u|-d)
    echo "$@" >> "$(dirname "$0")/calls.log"
    ;;
esac
"#;

    /// Write `body` as a shell script and point a config at it via `/bin/sh`.
    fn script(body: &str) -> (TempDir, PoeScriptConfig) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("poe.sh");
        std::fs::write(&path, body).unwrap();
        let config = PoeScriptConfig {
            program: PathBuf::from("/bin/sh"),
            args: vec![path.display().to_string()],
            ..PoeScriptConfig::default()
        };
        (dir, config)
    }

    fn failure_kind<T: std::fmt::Debug>(result: Result<T, PoeGateError>) -> ToolFailure {
        match result {
            Err(PoeGateError::Tool(ToolError { kind, .. })) => kind,
            other => panic!("expected tool error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_list_every_line_of_script_output() {
        let (_dir, config) = script(FAKE_POE);
        let poe = PoeScript::new(config);

        let devices = poe.list_devices().await.unwrap();
        assert_eq!(
            devices,
            vec![
                Device::new(DeviceId::new(1), true, "node-1"),
                Device::new(DeviceId::new(2), false, "node-2"),
                Device::new(DeviceId::new(3), true, "node-3"),
            ]
        );
    }

    #[tokio::test]
    async fn should_query_known_port() {
        let (_dir, config) = script(FAKE_POE);
        let poe = PoeScript::new(config);

        let device = poe.query_device(DeviceId::new(2)).await.unwrap();
        assert_eq!(device, Some(Device::new(DeviceId::new(2), false, "node-2")));
    }

    #[tokio::test]
    async fn should_return_none_when_query_prints_nothing() {
        let (_dir, config) = script(FAKE_POE);
        let poe = PoeScript::new(config);

        let device = poe.query_device(DeviceId::new(42)).await.unwrap();
        assert_eq!(device, None);
    }

    #[tokio::test]
    async fn should_pass_up_and_down_flags_to_script() {
        let (dir, config) = script(FAKE_POE);
        let poe = PoeScript::new(config);

        poe.set_power(DeviceId::new(7), PowerState::On).await.unwrap();
        poe.set_power(DeviceId::new(7), PowerState::Off).await.unwrap();

        let calls = std::fs::read_to_string(dir.path().join("calls.log")).unwrap();
        assert_eq!(calls, "-u -p 7\n-d -p 7\n");
    }

    #[tokio::test]
    async fn should_ignore_non_zero_exit_by_default() {
        let (_dir, config) = script("echo 'port is stuck' >&2\nexit 3\n");
        let poe = PoeScript::new(config);

        let result = poe.set_power(DeviceId::new(7), PowerState::On).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_on_non_zero_exit_when_checked() {
        let (_dir, mut config) = script("echo 'port is stuck' >&2\nexit 3\n");
        config.check_exit_status = true;
        let poe = PoeScript::new(config);

        let result = poe.set_power(DeviceId::new(7), PowerState::Off).await;
        assert_eq!(failure_kind(result), ToolFailure::NonZeroExit);
    }

    #[tokio::test]
    async fn should_carry_stderr_in_exit_status_error() {
        let (_dir, mut config) = script("echo 'port is stuck' >&2\nexit 3\n");
        config.check_exit_status = true;
        let poe = PoeScript::new(config);

        let Err(PoeGateError::Tool(err)) = poe.set_power(DeviceId::new(7), PowerState::On).await
        else {
            panic!("expected tool error");
        };
        assert!(err.source.to_string().ends_with(": port is stuck"));
    }

    #[tokio::test]
    async fn should_report_malformed_output_when_not_utf8() {
        let (_dir, config) = script("printf '1 Up node-\\377\\n'\n");
        let poe = PoeScript::new(config);

        let result = poe.list_devices().await;
        assert_eq!(failure_kind(result), ToolFailure::MalformedOutput);
    }

    #[tokio::test]
    async fn should_report_malformed_listing() {
        let (_dir, config) = script("echo '1 Up node-1'\necho 'garbage'\n");
        let poe = PoeScript::new(config);

        let result = poe.list_devices().await;
        assert_eq!(failure_kind(result), ToolFailure::MalformedOutput);
    }

    #[tokio::test]
    async fn should_report_malformed_query_answer() {
        let (_dir, config) = script("echo 'x Up node-1'\n");
        let poe = PoeScript::new(config);

        let result = poe.query_device(DeviceId::new(1)).await;
        assert_eq!(failure_kind(result), ToolFailure::MalformedOutput);
    }

    #[tokio::test]
    async fn should_time_out_slow_script() {
        let (_dir, mut config) = script("sleep 10\n");
        config.timeout_secs = Some(1);
        let poe = PoeScript::new(config);

        let result = poe.list_devices().await;
        assert_eq!(failure_kind(result), ToolFailure::TimedOut);
    }

    #[tokio::test]
    async fn should_report_unavailable_when_program_missing() {
        let dir = TempDir::new().unwrap();
        let poe = PoeScript::new(PoeScriptConfig {
            program: dir.path().join("does-not-exist.sh"),
            ..PoeScriptConfig::default()
        });

        let result = poe.list_devices().await;
        assert_eq!(failure_kind(result), ToolFailure::Unavailable);
    }
}
