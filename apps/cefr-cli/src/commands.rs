use std::io::{Read, Write};
use std::path::PathBuf;

use cefr_analysis::DefaultAnalyzer;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `None` or `-` reads the text from stdin.
    Analyze(Option<String>),
    Lookup(Vec<String>),
    Stats,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

pub fn usage(prog: &str) -> String {
    format!(
        "Usage: {prog} [--config <path>] <command>\n\n\
         Commands:\n  \
         analyze [TEXT|-]   analyze feedback text (stdin when omitted or '-')\n  \
         lookup WORD...     resolve individual words\n  \
         stats              vocabulary size per level"
    )
}

pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut config_path = None;
    let mut rest = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args.get(i + 1).ok_or("Error: --config requires a path")?;
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let mut rest = rest.into_iter();
    let command = match rest.next().as_deref() {
        Some("analyze") => {
            let words: Vec<String> = rest.collect();
            Command::Analyze(if words.is_empty() { None } else { Some(words.join(" ")) })
        }
        Some("lookup") => {
            let words: Vec<String> = rest.collect();
            if words.is_empty() {
                return Err("Error: lookup requires at least one word".to_string());
            }
            Command::Lookup(words)
        }
        Some("stats") => Command::Stats,
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("Error: missing command".to_string()),
    };
    Ok(Invocation { config_path, command })
}

/// Execute `command`, writing pretty JSON to `out`. `input` is only read by `analyze` without text.
pub fn run<R, W>(command: Command, analyzer: &DefaultAnalyzer, mut input: R, out: &mut W) -> anyhow::Result<()>
where
    R: Read,
    W: Write,
{
    match command {
        Command::Analyze(text) => {
            let text = match text {
                Some(text) if text != "-" => text,
                _ => {
                    let mut buf = String::new();
                    input.read_to_string(&mut buf)?;
                    buf
                }
            };
            serde_json::to_writer_pretty(&mut *out, &analyzer.analyze(&text))?;
        }
        Command::Lookup(words) => {
            let results: Vec<_> = words.iter().map(|w| analyzer.resolver().analyze_token(w)).collect();
            serde_json::to_writer_pretty(&mut *out, &results)?;
        }
        Command::Stats => {
            let vocabulary = analyzer.resolver().vocabulary();
            let stats = serde_json::json!({
                "entries": vocabulary.len(),
                "levels": vocabulary.level_counts(),
            });
            serde_json::to_writer_pretty(&mut *out, &stats)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
