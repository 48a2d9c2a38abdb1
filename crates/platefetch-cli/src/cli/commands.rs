use crate::cli::{
    config::{FetchConfig, PlateCommand},
    http::HttpFetcher,
    service::{fetch::FetchUrls, plate},
};
use anyhow::Context;
use std::io::{BufRead, IsTerminal, Write};

pub fn run_plate(command: PlateCommand) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        PlateCommand::Encode { index } => {
            let plate = plate::encode(&index)?;
            writeln!(out, "{plate}")?;
        }
        PlateCommand::Decode { code } => {
            let index = plate::decode(&code)?;
            writeln!(out, "{index}")?;
        }
        PlateCommand::Max => {
            let (index, plate) = plate::max();
            writeln!(out, "{index}\t{plate}")?;
        }
        PlateCommand::Range { start, count } => {
            for code in plate::range(&start, count)? {
                writeln!(out, "{}\t{code}", code.index())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub async fn run_fetch(config: FetchConfig) -> anyhow::Result<()> {
    let urls = if config.urls.is_empty() && !std::io::stdin().is_terminal() {
        read_urls(std::io::stdin().lock()).context("failed to read URLs from stdin")?
    } else {
        config.urls
    };

    let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)?;
    let outcomes = FetchUrls::new(fetcher).execute(urls, config.limit).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.pretty {
        serde_json::to_writer_pretty(&mut out, &outcomes)
    } else {
        serde_json::to_writer(&mut out, &outcomes)
    }
    .context("failed to write outcomes")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// One URL per line; blank lines and `#` comments are skipped.
fn read_urls(input: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            urls.push(line.to_owned());
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_url_per_line() {
        let input = "https://a.test/1\n\n  https://b.test/2  \n# skipped\nhttps://a.test/1\n";
        let urls = read_urls(input.as_bytes()).unwrap();
        assert_eq!(
            urls,
            ["https://a.test/1", "https://b.test/2", "https://a.test/1"]
        );
    }

    #[test]
    fn empty_input_reads_nothing() {
        assert!(read_urls(&b""[..]).unwrap().is_empty());
    }
}
