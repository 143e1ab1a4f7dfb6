// Command line front end for the test case store.
//
//   kodegen-testcases record <base-dir> <url> <name>   (case JSON on stdin)
//   kodegen-testcases list <base-dir> <url>
//   kodegen-testcases show <file>

use anyhow::{Context, Result, bail};
use kodegen_tools_testcases::{CaseData, CaseFileParser, CaseStore, CaseStoreConfig, WriteOutcome};
use std::io::Read;
use std::path::Path;

const USAGE: &str = "usage:
  kodegen-testcases record <base-dir> <url> <name>   (case JSON on stdin)
  kodegen-testcases list <base-dir> <url>
  kodegen-testcases show <file>";

fn open_store(base_dir: &str) -> Result<CaseStore> {
    let config = CaseStoreConfig::builder().base_dir(base_dir).build()?;
    Ok(CaseStore::new(config))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["record", base_dir, url, name] => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read case JSON from stdin")?;
            let data: CaseData =
                serde_json::from_str(&input).context("Failed to parse case JSON")?;

            let store = open_store(base_dir)?;
            match store
                .create_async((*url).to_string(), (*name).to_string(), data)
                .await?
            {
                WriteOutcome::Written { path, .. } => {
                    log::info!("Recorded case '{name}' at {}", path.display());
                }
                WriteOutcome::Skipped => {
                    log::info!("Nothing to record for '{name}' ({url})");
                }
            }
        }
        ["list", base_dir, url] => {
            let store = open_store(base_dir)?;
            let cases = store.list_async((*url).to_string()).await?;
            log::info!("Found {} case(s) for {url}", cases.len());
            println!("{}", serde_json::to_string_pretty(&cases)?);
        }
        ["show", file] => {
            let parsed = CaseFileParser::parse(Path::new(file))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}
