/// 検出結果の整形
use crate::error::Result;
use crate::features::FoundFeatures;
use clap::ValueEnum;

pub const NONE_FOUND: &str = "None of the known instruction sets were found";
const HEADER: &str = "Found these CPU features:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Feature names with the mnemonics that matched them
    #[default]
    Text,
    /// Feature names only
    List,
    /// JSON object, feature name to matched mnemonics
    Json,
}

pub fn render(found: &FoundFeatures, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(found)?,
        _ if found.is_empty() => NONE_FOUND.to_string(),
        OutputFormat::Text => {
            let mut out = vec![HEADER.to_string()];
            for (name, mnemonics) in found.iter() {
                out.push(format!("{}: {}", name, mnemonics.join(", ")));
            }
            out.join("\n")
        }
        OutputFormat::List => {
            let mut out = vec![HEADER.to_string()];
            out.extend(found.names().map(String::from));
            out.join("\n")
        }
    };

    Ok(rendered)
}
