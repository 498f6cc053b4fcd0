/// 外部ツール呼び出し
///
/// 外部プロセスを1回だけ同期実行し、stdout/stderr と成否を返す。
/// 異常終了は Err にせず `ToolOutput::success` で返し、呼び出し側が
/// `into_stdout` で `ToolExecutionFailed` に変換する。
use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// 外部ツールの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// 成功なら stdout を返し、失敗なら stderr を載せたエラーにする
    pub fn into_stdout(self, tool: &str) -> Result<String> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(Error::ToolExecutionFailed {
                tool: tool.to_string(),
                // 末尾の改行を残すと診断が複数行になる
                stderr: self.stderr.trim_end().to_string(),
            })
        }
    }
}

/// 外部ツールの実行窓口
///
/// パイプラインはこのトレイト越しにしかプロセスを起動しない。
/// テストでは呼び出しを記録する偽物に差し替える。
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&str>) -> Result<ToolOutput>;
}

/// `std::process::Command` による実装
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], stdin: Option<&str>) -> Result<ToolOutput> {
        tracing::debug!("exec: {} {}", program, args.join(" "));

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ToolNotFound { tool: program.to_string() },
            _ => Error::Spawn {
                tool: program.to_string(),
                source: e,
            },
        })?;

        if let Some(input) = stdin {
            // take() で stdin を閉じないと子プロセスが EOF を待ち続ける
            if let Some(mut pipe) = child.stdin.take() {
                // 入力を読み切らずに終了したツールは終了コードと stderr で報告する
                match pipe.write_all(input.as_bytes()) {
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        tracing::debug!("{} closed stdin early", program);
                    }
                    other => other?,
                }
            }
        }

        let output = child.wait_with_output()?;
        let result = ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(
            "{} exited with {} ({} bytes stdout, {} bytes stderr)",
            program,
            output.status,
            result.stdout.len(),
            result.stderr.len()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_not_found() {
        let result = SystemRunner.run("asm-inspect-no-such-tool", &[], None);
        match result {
            Err(Error::ToolNotFound { tool }) => assert_eq!(tool, "asm-inspect-no-such-tool"),
            other => panic!("expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_into_stdout_failure_carries_stderr() {
        let output = ToolOutput {
            success: false,
            stdout: String::new(),
            stderr: "boom".to_string(),
        };
        let err = output.into_stdout("llvm-mca").unwrap_err();
        assert!(matches!(
            err,
            Error::ToolExecutionFailed { ref tool, ref stderr }
                if tool == "llvm-mca" && stderr == "boom"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdin_is_piped_through() {
        let output = SystemRunner.run("cat", &[], Some("  vpaddd ymm0, ymm1, ymm2\n")).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "  vpaddd ymm0, ymm1, ymm2\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported_not_raised() {
        let args = vec!["-c".to_string(), "echo bad >&2; exit 3".to_string()];
        let output = SystemRunner.run("sh", &args, None).unwrap();
        assert!(!output.success);
        assert_eq!(output.stderr.trim(), "bad");
    }

    #[test]
    fn test_failure_stderr_is_trimmed() {
        let output = ToolOutput {
            success: false,
            stdout: String::new(),
            stderr: "error: unknown target CPU 'foo'\n".to_string(),
        };
        let err = output.into_stdout("llvm-mca").unwrap_err();
        assert_eq!(err.to_string(), "Failed to run 'llvm-mca': error: unknown target CPU 'foo'");
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_keeps_stderr() {
        // stdin を読まずに終了しても BrokenPipe ではなく終了コードで報告する
        let script = "echo 'unknown flag' >&2; exit 1";
        let args = vec!["-c".to_string(), script.to_string()];
        let input = "\tnop\n".repeat(200_000);
        let output = SystemRunner.run("sh", &args, Some(&input)).unwrap();

        assert!(!output.success);
        assert_eq!(output.stderr, "unknown flag\n");

        let err = output.into_stdout("llvm-mca").unwrap_err();
        assert_eq!(err.to_string(), "Failed to run 'llvm-mca': unknown flag");
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_is_spawn_error() {
        let err = SystemRunner.run("./Cargo.toml", &[], None).unwrap_err();
        assert!(matches!(err, Error::Spawn { ref tool, .. } if tool == "./Cargo.toml"));
        assert!(err.to_string().starts_with("Failed to start './Cargo.toml'"));
    }
}
