use anyhow::{anyhow, Result};
use bemkit::{ClassRequest, Composer};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File of newline-delimited JSON requests (defaults to stdin)
    pub input: Option<PathBuf>,
}

pub fn batch(args: BatchArgs, composer: &Composer) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.input {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| anyhow!("Cannot open {}: {}", path.display(), e))?;
            run_batch(BufReader::new(file), &mut out, composer)?;
        }
        None => {
            let stdin = io::stdin();
            run_batch(stdin.lock(), &mut out, composer)?;
        }
    }

    Ok(())
}

/// Compose one class string per non-blank input line
fn run_batch<R: BufRead, W: Write>(input: R, out: &mut W, composer: &Composer) -> Result<usize> {
    let mut count = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request = ClassRequest::from_json(&line)
            .map_err(|e| anyhow!("line {}: {}", index + 1, e))?;
        writeln!(out, "{}", composer.compose_request(&request))?;
        count += 1;
    }

    debug!(count, "batch complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch() {
        let input = concat!(
            r#"{"block": "card", "element": "title", "modifiers": ["fancy"], "extra": "inside-card"}"#,
            "\n\n",
            r#"{"block": "heading", "modifiers": "subheading"}"#,
            "\n",
        );
        let mut out = Vec::new();

        let count = run_batch(input.as_bytes(), &mut out, &Composer::new()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "card__title card__title--fancy inside-card\nheading heading--subheading\n"
        );
    }

    #[test]
    fn test_run_batch_reports_line_number() {
        let input = "{\"block\": \"card\"}\nnot json\n";
        let mut out = Vec::new();

        let err = run_batch(input.as_bytes(), &mut out, &Composer::new()).unwrap_err();

        assert!(err.to_string().starts_with("line 2:"));
    }
}
