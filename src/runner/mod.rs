use crate::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Capability seam for external OS commands. Every command the repair
/// sequence issues goes through this trait so the orchestration can run
/// against canned output in tests.
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

impl<T: CommandRunner> CommandRunner for &T {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(program, args).await
    }
}

/// Runs commands through the real OS, without a visible console window.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args);
        cmd.stdin(std::process::Stdio::null());
        cmd.stdout(std::process::Stdio::piped());
        cmd.stderr(std::process::Stdio::piped());

        #[cfg(windows)]
        cmd.creation_flags(windows_sys::Win32::System::Threading::CREATE_NO_WINDOW);

        let output = cmd
            .output()
            .await
            .map_err(|e| AppError::Command(format!("Failed to run {}: {}", program, e)))?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: decode_console(&output.stdout),
            stderr: decode_console(&output.stderr),
        })
    }
}

pub fn decode_console(bytes: &[u8]) -> String {
    if cfg!(windows) {
        decode_legacy(bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Console tools emit the legacy code page, not UTF-8. GBK is a superset of
/// the gb2312 output seen on the zh-CN systems this tool targets.
pub fn decode_legacy(bytes: &[u8]) -> String {
    let (text, _, _) = encoding_rs::GBK.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_decode_handles_gbk_adapter_headers() {
        let header = "以太网适配器 本地连接:";
        let (encoded, _, _) = encoding_rs::GBK.encode(header);
        assert_eq!(decode_legacy(&encoded), header);
    }

    #[test]
    fn legacy_decode_passes_ascii_through() {
        assert_eq!(decode_legacy(b"Windows IP Configuration"), "Windows IP Configuration");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn system_runner_captures_output_and_exit_code() {
        let output = SystemRunner.run("echo", &["hello"]).await.unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn system_runner_reports_missing_programs_as_errors() {
        let result = SystemRunner.run("netrepair-no-such-binary", &[]).await;
        assert!(result.is_err());
    }
}
