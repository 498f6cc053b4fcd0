/// パイプライン
///
/// どちらのコマンドも
/// 逆アセンブル → クリーンアップ → (解析 | feature 照合) → 結果
/// の一本道。途中でエラーになったら部分結果は返さない。
use crate::cleanup;
use crate::config::Toolchain;
use crate::error::{Error, Result};
use crate::features::{FeatureTable, FoundFeatures};
use crate::mca::AnalyzeRequest;
use crate::objdump::DisassembleRequest;
use crate::tool::ToolRunner;
use std::path::Path;
use tracing::{info, warn};

/// llvm-objdump を実行して逆アセンブル結果を得る
pub fn disassemble<R: ToolRunner + ?Sized>(
    runner: &R,
    tools: &Toolchain,
    request: &DisassembleRequest,
) -> Result<String> {
    info!("Disassembling with {}", tools.objdump);

    let output = runner.run(&tools.objdump, &request.to_args(), None)?;
    if output.success && !output.stderr.is_empty() {
        // シンボルが見つからない場合も objdump は警告だけ出して成功する
        warn!("{}: {}", tools.objdump, output.stderr.trim_end());
    }

    output.into_stdout(&tools.objdump)
}

/// コマンドA: 逆アセンブルして llvm-mca のレポートを返す
pub fn run_analysis<R: ToolRunner + ?Sized>(
    runner: &R,
    tools: &Toolchain,
    file: &Path,
    symbols: &[String],
    analyze: &AnalyzeRequest,
) -> Result<String> {
    let raw = disassemble(runner, tools, &DisassembleRequest::for_analysis(file, symbols))?;
    let assembly = cleanup::strip_angle_brackets(&raw);

    if !assembly.is_ascii() {
        return Err(Error::InvalidArgument(format!(
            "disassembly of '{}' is not plain ASCII and cannot be passed to {}",
            file.display(),
            tools.mca
        )));
    }

    info!("Analyzing {} bytes of assembly with {}", assembly.len(), tools.mca);
    let report = runner
        .run(&tools.mca, &analyze.to_args(), Some(assembly.as_str()))?
        .into_stdout(&tools.mca)?;

    Ok(report)
}

/// コマンドB: 1関数が使っている命令セット拡張を調べる
pub fn run_feature_detection<R: ToolRunner + ?Sized>(
    runner: &R,
    tools: &Toolchain,
    table: &FeatureTable,
    file: &Path,
    symbol: &str,
    cpu: Option<&str>,
) -> Result<FoundFeatures> {
    let request = DisassembleRequest::for_features(file, symbol, cpu);
    let raw = disassemble(runner, tools, &request)?;
    let cleaned = cleanup::clean_for_features(&raw);

    if !cleaned.contains_symbol(symbol) {
        return Err(Error::SymbolNotFound {
            symbol: symbol.to_string(),
            file: file.display().to_string(),
        });
    }

    info!("Matching '{}' against {} feature sets", symbol, table.len());
    Ok(table.detect(&cleaned.text))
}
