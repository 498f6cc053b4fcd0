/// 外部ツールの所在
///
/// CLI フラグ > 環境変数 (`LLVM_OBJDUMP` / `LLVM_MCA`) > 既定名 の順で決まる。
/// 優先順位の解決は clap 側 (`env` feature) に任せる。
use crate::mca::LLVM_MCA;
use crate::objdump::LLVM_OBJDUMP;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub objdump: String,
    pub mca: String,
}

impl Toolchain {
    pub fn new(objdump: impl Into<String>, mca: impl Into<String>) -> Self {
        Self {
            objdump: objdump.into(),
            mca: mca.into(),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(LLVM_OBJDUMP, LLVM_MCA)
    }
}
