/// asm-inspect ライブラリ
///
/// llvm-objdump / llvm-mca を外部コラボレータとして呼び出し、
/// 関数が使う CPU 命令セット拡張の検出と llvm-mca 解析を行う

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod mca;
pub mod objdump;
pub mod pipeline;
pub mod report;
pub mod tool;

pub use config::Toolchain;
pub use error::{Error, Result};
pub use features::{FeatureSet, FeatureTable, FoundFeatures, MnemonicSet};
pub use mca::{AnalyzeRequest, AsmSyntax};
pub use report::OutputFormat;
pub use tool::{SystemRunner, ToolOutput, ToolRunner};
