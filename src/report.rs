use charsets_cli::Args;
use charsets_core::{
    ParseCharsetError, StandardCharset,
    config::{Config, OutputFormat},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub aliases: bool,
    pub encoding: bool,
    pub default_charset: Option<StandardCharset>,
}

impl ReportOptions {
    /// Command line switches win over the config file.
    pub fn new(args: &Args, config: &Config) -> Self {
        Self {
            format: if args.json {
                OutputFormat::Json
            } else {
                config.format
            },
            aliases: args.aliases || config.show_aliases,
            encoding: args.encoding,
            default_charset: Some(config.default_charset),
        }
    }
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub charsets: Vec<StandardCharset>,
    pub unknown: Vec<ParseCharsetError>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Resolves every name, keeping the ones that parse. An empty list selects every charset.
pub fn resolve(names: &[String]) -> Resolution {
    let mut resolution = Resolution::default();
    if names.is_empty() {
        resolution.charsets.extend(StandardCharset::iter());
        return resolution;
    }

    for name in names {
        match name.parse::<StandardCharset>() {
            Ok(charset) => {
                tracing::debug!("Resolved `{name}` to {charset}");
                resolution.charsets.push(charset);
            }
            Err(err) => {
                tracing::warn!("Unknown charset `{}`", err.name());
                resolution.unknown.push(err);
            }
        }
    }
    resolution
}

#[derive(Serialize)]
struct Entry {
    symbol: &'static str,
    name: StandardCharset,
    description: &'static str,
    default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    aliases: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'static str>,
}

impl Entry {
    fn new(charset: StandardCharset, options: &ReportOptions) -> Self {
        Self {
            symbol: charset.symbol(),
            name: charset,
            description: charset.description(),
            default: options.default_charset == Some(charset),
            aliases: options.aliases.then(|| charset.aliases()),
            encoding: options.encoding.then(|| charset.encoding().name()),
        }
    }
}

pub fn render(charsets: &[StandardCharset], options: &ReportOptions) -> anyhow::Result<String> {
    let entries: Vec<_> = charsets
        .iter()
        .map(|charset| Entry::new(*charset, options))
        .collect();

    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Table => {
            let mut output = String::new();
            for entry in entries {
                output.push_str(entry.symbol);
                output.push('\t');
                output.push_str(entry.name.canonical_name());
                if let Some(encoding) = entry.encoding {
                    output.push('\t');
                    output.push_str(encoding);
                }
                if let Some(aliases) = entry.aliases {
                    output.push('\t');
                    output.push_str(&aliases.join(", "));
                }
                if entry.default {
                    output.push_str("\t(default)");
                }
                output.push('\n');
            }
            Ok(output)
        }
    }
}
