/// llvm-mca の引数組み立て
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub const LLVM_MCA: &str = "llvm-mca";

/// レポートのオペランド順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsmSyntax {
    #[default]
    Intel,
    Att,
}

impl AsmSyntax {
    /// `-output-asm-variant` に渡す番号
    pub fn variant_code(self) -> u8 {
        match self {
            AsmSyntax::Intel => 1,
            AsmSyntax::Att => 0,
        }
    }
}

impl FromStr for AsmSyntax {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intel" => Ok(AsmSyntax::Intel),
            "at&t" => Ok(AsmSyntax::Att),
            other => Err(Error::InvalidArgument(format!(
                "syntax '{}' is not 'intel' or 'at&t'",
                other
            ))),
        }
    }
}

impl fmt::Display for AsmSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmSyntax::Intel => write!(f, "intel"),
            AsmSyntax::Att => write!(f, "at&t"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    pub syntax: AsmSyntax,
    pub all_stats: bool,
    pub all_views: bool,
    /// 指定時のみ `-mcpu` を付ける（未指定ならホスト CPU のモデル）
    pub cpu: Option<String>,
}

impl AnalyzeRequest {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![format!("-output-asm-variant={}", self.syntax.variant_code())];

        if self.all_stats {
            args.push("-all-stats".to_string());
        }
        if self.all_views {
            args.push("-all-views".to_string());
        }
        if let Some(cpu) = &self.cpu {
            args.push(format!("-mcpu={}", cpu.to_lowercase()));
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_codes() {
        assert_eq!("intel".parse::<AsmSyntax>().unwrap().variant_code(), 1);
        assert_eq!("at&t".parse::<AsmSyntax>().unwrap().variant_code(), 0);
    }

    #[test]
    fn test_unknown_syntax_is_invalid_argument() {
        let err = "gas".parse::<AsmSyntax>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_default_args() {
        let args = AnalyzeRequest::default().to_args();
        assert_eq!(args, vec!["-output-asm-variant=1"]);
    }

    #[test]
    fn test_all_switches() {
        let request = AnalyzeRequest {
            syntax: AsmSyntax::Att,
            all_stats: true,
            all_views: true,
            cpu: Some("ZNVER3".to_string()),
        };
        assert_eq!(
            request.to_args(),
            vec!["-output-asm-variant=0", "-all-stats", "-all-views", "-mcpu=znver3"]
        );
    }
}
