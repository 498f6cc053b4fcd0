/// CPU 命令セット拡張の検出
///
/// 1関数分の逆アセンブル結果からニーモニック集合を作り、
/// Feature Table の各エントリと独立に突き合わせる。
/// 1つのニーモニックが複数の拡張に該当すれば、そのすべてに報告する。

mod table;

pub use table::BUILTIN_FEATURES;

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// 命令セット拡張1つ分
#[derive(Debug, Clone, Copy)]
pub struct FeatureSet {
    pub name: &'static str,
    pub mnemonics: &'static [&'static str],
}

/// 宣言順を保った Feature Table
#[derive(Debug, Clone, Copy)]
pub struct FeatureTable {
    sets: &'static [FeatureSet],
}

impl FeatureTable {
    pub const fn new(sets: &'static [FeatureSet]) -> Self {
        Self { sets }
    }

    /// 組み込みの x86 拡張表
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FEATURES)
    }

    pub fn sets(&self) -> &'static [FeatureSet] {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// ニーモニック集合と突き合わせる
    pub fn match_mnemonics(&self, mnemonics: &MnemonicSet) -> FoundFeatures {
        let mut found = FoundFeatures::default();

        for set in self.sets {
            for mnemonic in set.mnemonics {
                let mnemonic = mnemonic.to_lowercase();
                if mnemonics.contains(&mnemonic) {
                    found.record(set.name, mnemonic);
                }
            }
        }

        tracing::debug!(
            "{} of {} feature sets matched {} distinct mnemonics",
            found.len(),
            self.sets.len(),
            mnemonics.len()
        );
        found
    }

    /// クリーンアップ済みテキストから直接検出する
    pub fn detect(&self, cleaned_text: &str) -> FoundFeatures {
        self.match_mnemonics(&MnemonicSet::from_disassembly(cleaned_text))
    }
}

impl Default for FeatureTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 1関数に現れた小文字ニーモニックの集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnemonicSet {
    inner: HashSet<String>,
}

impl MnemonicSet {
    /// 空白で始まる行（命令行）の先頭トークンを集める
    pub fn from_disassembly(text: &str) -> Self {
        let inner = text
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_whitespace()))
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_lowercase)
            .collect();

        Self { inner }
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.inner.contains(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// 検出結果: 拡張名 → 実際に見つかったニーモニック
///
/// 順序は Feature Table の宣言順。名前だけの一覧は `names()` で得る。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoundFeatures {
    inner: IndexMap<&'static str, Vec<String>>,
}

impl FoundFeatures {
    fn record(&mut self, feature: &'static str, mnemonic: String) {
        let matched = self.inner.entry(feature).or_default();
        if !matched.contains(&mnemonic) {
            matched.push(mnemonic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.keys().copied()
    }

    pub fn get(&self, feature: &str) -> Option<&[String]> {
        self.inner.get(feature).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.inner.iter().map(|(name, found)| (*name, found.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SSE2_ONLY: &[FeatureSet] = &[FeatureSet {
        name: "SSE2",
        mnemonics: &["movapd", "paddw"],
    }];

    static OVERLAPPING: &[FeatureSet] = &[
        FeatureSet { name: "SSE2", mnemonics: &["paddw", "movapd"] },
        FeatureSet { name: "MMX", mnemonics: &["paddw", "emms"] },
        FeatureSet { name: "BMI1", mnemonics: &["TZCNT"] },
    ];

    #[test]
    fn test_sse2_movapd() {
        let found = FeatureTable::new(SSE2_ONLY).detect("  movapd xmm0, xmm1\n  ret\n");
        assert_eq!(found.names().collect::<Vec<_>>(), vec!["SSE2"]);
        assert_eq!(found.get("SSE2").unwrap(), ["movapd"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let found = FeatureTable::new(SSE2_ONLY).detect("  ret\n");
        assert!(found.is_empty());
    }

    #[test]
    fn test_shared_mnemonic_reported_under_every_feature() {
        let found = FeatureTable::new(OVERLAPPING).detect("\tpaddw\tmm0, mm1\n");
        assert_eq!(found.names().collect::<Vec<_>>(), vec!["SSE2", "MMX"]);
        assert_eq!(found.get("MMX").unwrap(), ["paddw"]);
    }

    #[test]
    fn test_order_follows_table_not_text() {
        let text = "\temms\n\tmovapd\txmm0, xmm1\n\ttzcnt\teax, edi\n";
        let found = FeatureTable::new(OVERLAPPING).detect(text);
        assert_eq!(found.names().collect::<Vec<_>>(), vec!["SSE2", "MMX", "BMI1"]);
        assert_eq!(found.get("BMI1").unwrap(), ["tzcnt"]);
    }

    #[test]
    fn test_mnemonics_are_case_insensitive() {
        let set = MnemonicSet::from_disassembly("\tVPXOR\txmm0, xmm0, xmm0\n");
        assert!(set.contains("vpxor"));
    }

    #[test]
    fn test_only_indented_lines_count() {
        let set = MnemonicSet::from_disassembly("foo.o:\tfile format elf64-x86-64\n\tret\n");
        assert_eq!(set.len(), 1);
        assert!(set.contains("ret"));
        assert!(!set.contains("foo.o:"));
    }

    #[test]
    fn test_builtin_table_duplicates_reported_once() {
        // AVX512F に vpermi2d が重複して載っている
        let found = FeatureTable::builtin().detect("\tvpermi2d\tzmm0, zmm1, zmm2\n");
        assert_eq!(found.get("AVX512F").unwrap(), ["vpermi2d"]);
    }

    #[test]
    fn test_builtin_avx2_function() {
        let text = "\tvpxor\txmm0, xmm0, xmm0\n\
                    \tvpcmpeqb\tymm1, ymm0, ymmword ptr [rdi]\n\
                    \tvpmovmskb\teax, ymm1\n\
                    \ttzcnt\teax, eax\n\
                    \tvzeroupper\n\
                    \tret\n";
        let found = FeatureTable::builtin().detect(text);

        assert_eq!(found.get("AVX2").unwrap(), ["vpcmpeqb", "vpmovmskb", "vpxor"]);
        assert_eq!(found.get("AVX").unwrap(), ["vpxor", "vzeroupper"]);
        assert_eq!(found.get("BMI1").unwrap(), ["tzcnt"]);
        assert!(found.get("SSE2").is_none());

        let names: Vec<_> = found.names().collect();
        assert_eq!(names, vec!["BMI1", "AVX2", "AVX"]);
    }

    #[test]
    fn test_every_builtin_mnemonic_reports_its_feature() {
        let table = FeatureTable::builtin();

        for set in table.sets() {
            for mnemonic in set.mnemonics {
                let found = table.detect(&format!("\t{}\n", mnemonic));
                let expected = mnemonic.to_lowercase();
                let matched = found
                    .get(set.name)
                    .unwrap_or_else(|| panic!("{} not reported for {}", set.name, mnemonic));
                assert!(matched.contains(&expected), "{}: {:?}", set.name, matched);
            }
        }
    }

    #[test]
    fn test_builtin_table_names_are_unique() {
        let table = FeatureTable::builtin();
        let names: HashSet<_> = table.sets().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), table.len());
        assert!(table.sets().iter().all(|s| !s.name.ends_with(':')));
    }

    #[test]
    fn test_json_keeps_table_order() {
        let found =
            FeatureTable::new(OVERLAPPING).detect("\ttzcnt\teax, edi\n\tpaddw\tmm0, mm1\n");
        let json = serde_json::to_string(&found).unwrap();
        assert_eq!(json, r#"{"SSE2":["paddw"],"MMX":["paddw"],"BMI1":["tzcnt"]}"#);
    }
}
