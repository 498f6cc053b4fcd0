/// エラー分類
///
/// どのエラーもその実行にとって致命的で、リトライはしない。
/// バイナリ側で1行のメッセージとして標準エラーに出し、終了コード1で終わる。
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 外部ツールが PATH 上に見つからない
    #[error("Tool '{tool}' not found")]
    ToolNotFound { tool: String },

    /// 外部ツールは起動したが非ゼロで終了した
    #[error("Failed to run '{tool}': {stderr}")]
    ToolExecutionFailed { tool: String, stderr: String },

    /// 見つかったが起動できなかった（実行権限が無いなど）
    #[error("Failed to start '{tool}': {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    /// クリーンアップ後の逆アセンブル結果にシンボルが無い
    #[error("Can't find the '{symbol}' symbol in the file '{file}'.")]
    SymbolNotFound { symbol: String, file: String },

    #[error("'{0}' is not a valid path to the file")]
    InvalidPath(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_tool() {
        let err = Error::ToolNotFound { tool: "llvm-objdump".to_string() };
        assert_eq!(err.to_string(), "Tool 'llvm-objdump' not found");

        let err = Error::ToolExecutionFailed {
            tool: "llvm-mca".to_string(),
            stderr: "error: invalid instruction".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to run 'llvm-mca': error: invalid instruction");
    }

    #[test]
    fn test_symbol_not_found_names_symbol_and_file() {
        let err = Error::SymbolNotFound {
            symbol: "strlen_avx2".to_string(),
            file: "libfoo.so".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("strlen_avx2"));
        assert!(msg.contains("libfoo.so"));
    }
}
