/// 逆アセンブル出力のクリーンアップ
///
/// llvm-objdump のテキストを次段（llvm-mca / feature 検出）が読める形に整える。
/// 行単位のルールは互いに独立なので、宣言順に関係なくどれか1つに当たれば捨てる。

/// 行ルール: (名前, 判定関数)
type LineRule = (&'static str, fn(&str) -> bool);

/// feature 検出の前に捨てる行
const NOISE_RULES: &[LineRule] = &[
    ("archive member header", is_archive_member_header),
    ("blank line", is_blank),
    ("section banner", is_section_banner),
    ("symbol label", is_symbol_label),
];

/// `libfoo.a(bar.o):	file format elf64-x86-64`
fn is_archive_member_header(line: &str) -> bool {
    let bytes = line.as_bytes();

    line.match_indices("):").any(|(close, _)| {
        // "):" の後ろに空白1文字 + 何か1文字以上
        let rest = &bytes[close + 2..];
        if rest.len() < 2 || !rest[0].is_ascii_whitespace() {
            return false;
        }
        // '(' の前に1文字以上、'(' と ')' の間に1文字以上
        bytes[..close]
            .iter()
            .enumerate()
            .any(|(open, &b)| b == b'(' && open >= 1 && open + 1 < close)
    })
}

fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// `Disassembly of section .text:`
fn is_section_banner(line: &str) -> bool {
    line.strip_prefix("Disassembly of section ")
        .map_or(false, |rest| !rest.is_empty())
}

/// `<strlen_avx2>:`
fn is_symbol_label(line: &str) -> bool {
    label_name(line).is_some()
}

fn label_name(line: &str) -> Option<&str> {
    line.strip_prefix('<')
        .and_then(|rest| rest.strip_suffix(">:"))
        .filter(|name| !name.is_empty())
}

/// feature 検出用にクリーンアップしたテキスト
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedDisassembly {
    pub text: String,
    /// 取り除いたラベル行のシンボル名
    pub labels: Vec<String>,
}

impl CleanedDisassembly {
    /// 要求したシンボルが逆アセンブルされたかどうか
    ///
    /// 本文に現れるか、取り除いたラベルのどれかと一致すれば存在するとみなす。
    /// 分岐を持たない関数は本文にシンボル名が出てこないため。
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.text.contains(symbol) || self.labels.iter().any(|label| label == symbol)
    }
}

/// ノイズ行を取り除き、命令行だけを残す
pub fn clean_for_features(raw: &str) -> CleanedDisassembly {
    let mut cleaned = CleanedDisassembly::default();
    let mut dropped = 0usize;

    for line in raw.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);

        match NOISE_RULES.iter().find(|(_, rule)| rule(body)) {
            Some((name, _)) => {
                if let Some(label) = label_name(body) {
                    cleaned.labels.push(label.to_string());
                }
                tracing::trace!("drop {}: {:?}", name, body);
                dropped += 1;
            }
            None => cleaned.text.push_str(line),
        }
    }

    tracing::debug!("cleanup dropped {} lines, kept {} bytes", dropped, cleaned.text.len());
    cleaned
}

/// llvm-mca はシンボル化された分岐先の `<` `>` をパースできない
pub fn strip_angle_brackets(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJDUMP_OUTPUT: &str = "\
\n\
strlen.o:\tfile format elf64-x86-64\n\
\n\
Disassembly of section .text:\n\
\n\
<strlen_avx2>:\n\
\tvpxor\txmm0, xmm0, xmm0\n\
\tvpcmpeqb\tymm1, ymm0, ymmword ptr [rdi]\n\
\tjne\t0x20 <strlen_avx2+0x20>\n\
\tret\n";

    #[test]
    fn test_noise_lines_removed() {
        let cleaned = clean_for_features(OBJDUMP_OUTPUT);
        assert_eq!(
            cleaned.text,
            "strlen.o:\tfile format elf64-x86-64\n\
             \tvpxor\txmm0, xmm0, xmm0\n\
             \tvpcmpeqb\tymm1, ymm0, ymmword ptr [rdi]\n\
             \tjne\t0x20 <strlen_avx2+0x20>\n\
             \tret\n"
        );
        assert_eq!(cleaned.labels, vec!["strlen_avx2"]);
    }

    #[test]
    fn test_archive_member_header() {
        assert!(is_archive_member_header("libstr.a(strlen.o):\tfile format elf64-x86-64"));
        assert!(!is_archive_member_header("strlen.o:\tfile format elf64-x86-64"));
        assert!(!is_archive_member_header("\tcall\tqword ptr [rip + foo]"));
        assert!(!is_archive_member_header("(x):\tfile format"));
    }

    #[test]
    fn test_section_banner_needs_name() {
        assert!(is_section_banner("Disassembly of section .text:"));
        assert!(!is_section_banner("Disassembly of section "));
    }

    #[test]
    fn test_symbol_in_branch_target() {
        let cleaned = clean_for_features(OBJDUMP_OUTPUT);
        assert!(cleaned.text.contains("strlen_avx2"));
        assert!(cleaned.contains_symbol("strlen_avx2"));
    }

    #[test]
    fn test_symbol_only_as_label() {
        let raw = "\nDisassembly of section .text:\n\n<add_one>:\n\tlea\teax, [rdi + 1]\n\tret\n";
        let cleaned = clean_for_features(raw);
        assert!(!cleaned.text.contains("add_one"));
        assert!(cleaned.contains_symbol("add_one"));
    }

    #[test]
    fn test_missing_symbol() {
        // llvm-objdump はシンボルが無くても警告だけで 0 終了する
        let raw = "\nfoo.o:\tfile format elf64-x86-64\n";
        let cleaned = clean_for_features(raw);
        assert!(!cleaned.contains_symbol("strlen_avx2"));
    }

    #[test]
    fn test_strip_angle_brackets() {
        let raw = "<main>:\n\tjmp\t<L0>\n";
        assert_eq!(strip_angle_brackets(raw), "main:\n\tjmp\tL0\n");
    }
}
