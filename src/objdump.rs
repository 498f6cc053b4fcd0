/// llvm-objdump の引数組み立て
///
/// 2つのパイプラインで要求するフラグが違うので、`DisassembleRequest` に
/// 用途ごとのコンストラクタを用意する。
use std::path::{Path, PathBuf};

pub const LLVM_OBJDUMP: &str = "llvm-objdump";

/// シンボルによる逆アセンブル範囲の絞り込み
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolFilter {
    /// バイナリ全体
    All,
    /// 列挙したシンボルのみ（カンマ区切りで渡す）
    Only(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct DisassembleRequest {
    file: PathBuf,
    symbols: SymbolFilter,
    cpu: Option<String>,
    /// feature 検出用: Intel 構文・色なし
    intel_syntax: bool,
    symbolize_operands: bool,
}

impl DisassembleRequest {
    /// llvm-mca に流す用（オペランドのシンボル化あり）
    pub fn for_analysis(file: impl AsRef<Path>, symbols: &[String]) -> Self {
        let symbols = if symbols.is_empty() {
            SymbolFilter::All
        } else {
            SymbolFilter::Only(symbols.to_vec())
        };

        Self {
            file: file.as_ref().to_path_buf(),
            symbols,
            cpu: None,
            intel_syntax: false,
            symbolize_operands: true,
        }
    }

    /// 1関数分の命令を取り出す用
    pub fn for_features(file: impl AsRef<Path>, symbol: &str, cpu: Option<&str>) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
            symbols: SymbolFilter::Only(vec![symbol.to_string()]),
            cpu: cpu.map(str::to_lowercase),
            intel_syntax: true,
            symbolize_operands: false,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.intel_syntax {
            args.extend(
                [
                    "--disassemble",
                    "--no-addresses",
                    "--no-show-raw-insn",
                    "--disassembler-color=off",
                    "--disassembler-options=intel",
                ]
                .map(String::from),
            );
        } else {
            args.extend(["-d", "--no-addresses", "--no-show-raw-insn"].map(String::from));
        }

        if self.symbolize_operands {
            args.push("--symbolize-operands".to_string());
        }

        args.push(self.file.to_string_lossy().into_owned());

        if let SymbolFilter::Only(names) = &self.symbols {
            args.push(format!("--disassemble-symbols={}", names.join(",")));
        }

        if let Some(cpu) = &self.cpu {
            args.push(format!("--mcpu={}", cpu));
        }

        args
    }
}

/// `-s a, b,c` 形式のシンボル列を分割する
pub fn split_symbols(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
