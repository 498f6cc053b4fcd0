/// 2つのコマンドの引数定義
///
/// 使い方のエラー（存在しないファイル、未知の構文名など）は clap が
/// 外部プロセスを起動する前に報告して終了する。
use crate::config::Toolchain;
use crate::error::{Error, Result};
use crate::mca::{AnalyzeRequest, AsmSyntax, LLVM_MCA};
use crate::objdump::{split_symbols, LLVM_OBJDUMP};
use crate::report::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::{Component, Path, PathBuf};

/// 実在するファイルだけを受け付ける
pub fn parse_binary_path(value: &str) -> Result<PathBuf> {
    let path = Path::new(value);
    if path.is_file() {
        // "./a//b.o" -> "a/b.o"
        Ok(path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect())
    } else {
        Err(Error::InvalidPath(value.to_string()))
    }
}

fn parse_syntax(value: &str) -> Result<AsmSyntax> {
    value.parse()
}

/// run-llvm-mca
#[derive(Debug, Parser)]
#[command(name = "run-llvm-mca")]
#[command(about = "Runs 'llvm-mca' over compiled binary file.", long_about = None)]
pub struct McaCli {
    /// Binary file to disassemble
    pub file: PathBuf,

    /// Comma-separated symbols to analyze (default: the whole binary)
    #[arg(short, long, value_name = "SYMBOLS")]
    pub symbols: Option<String>,

    /// Operand order of the report: intel or at&t
    #[arg(long, default_value = "intel", value_parser = parse_syntax)]
    pub syntax: AsmSyntax,

    /// Print all statistics
    #[arg(long)]
    pub all_stats: bool,

    /// Print all views
    #[arg(long)]
    pub all_views: bool,

    /// Target CPU for the llvm-mca scheduling model
    #[arg(long, value_name = "CPU")]
    pub cpu: Option<String>,

    /// llvm-objdump executable
    #[arg(long, env = "LLVM_OBJDUMP", default_value = LLVM_OBJDUMP)]
    pub objdump: String,

    /// llvm-mca executable
    #[arg(long, env = "LLVM_MCA", default_value = LLVM_MCA)]
    pub mca: String,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl McaCli {
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.as_deref().map(split_symbols).unwrap_or_default()
    }

    pub fn analyze_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            syntax: self.syntax,
            all_stats: self.all_stats,
            all_views: self.all_views,
            cpu: self.cpu.clone(),
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(self.objdump.as_str(), self.mca.as_str())
    }
}

/// view-cpu-features
#[derive(Debug, Parser)]
#[command(name = "view-cpu-features")]
#[command(
    about = "Finds out what CPU features uses a particular function by searching instructions mnemonics",
    long_about = None
)]
pub struct FeaturesCli {
    /// File to disassemble
    #[arg(value_parser = parse_binary_path)]
    pub file: PathBuf,

    /// A function for disassembling and viewing processor instructions
    #[arg(short, long, value_name = "SYMBOL")]
    pub symbol: String,

    /// Specify the processor for which to disassemble the code
    #[arg(long, value_name = "CPU")]
    pub cpu: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// llvm-objdump executable
    #[arg(long, env = "LLVM_OBJDUMP", default_value = LLVM_OBJDUMP)]
    pub objdump: String,

    /// Log to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl FeaturesCli {
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            objdump: self.objdump.clone(),
            ..Toolchain::default()
        }
    }
}
