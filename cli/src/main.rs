//! orgkit CLI - thin front end over the library crates.
//!
//! ```text
//! orgkit org <name>                      organization document as JSON
//! orgkit repos <name> [--license KEY]    public repository names
//! orgkit wait [n] [max_delay]            n random delays, in completion order
//! orgkit measure [n] [max_delay]         average time per delay task
//! orgkit generate                        ten paced random values
//! ```
//!
//! Logs go to stderr and are controlled by `RUST_LOG` (default `info`).

use std::env;
use std::io::stderr;

use anyhow::{Context, Result, bail};
use futures_util::StreamExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use orgkit_client::{DEFAULT_BASE_URL, GithubOrgClient, HttpFetcher};
use orgkit_config::OrgkitConfig;
use orgkit_tasks::DEFAULT_MAX_DELAY;

const DEFAULT_TASK_COUNT: u32 = 5;

const USAGE: &str = "usage: orgkit <org NAME | repos NAME [--license KEY] | wait [N] [MAX_DELAY] | measure [N] [MAX_DELAY] | generate>";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(env_filter)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Org {
        name: String,
    },
    Repos {
        name: String,
        license: Option<String>,
    },
    Wait {
        count: Option<u32>,
        max_delay: Option<u32>,
    },
    Measure {
        count: Option<u32>,
        max_delay: Option<u32>,
    },
    Generate,
}

impl Command {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(command) = args.next() else {
            bail!("missing command\n{USAGE}");
        };
        let rest: Vec<String> = args.collect();

        match command.as_str() {
            "org" => match rest.as_slice() {
                [name] => Ok(Command::Org { name: name.clone() }),
                _ => bail!("org takes exactly one organization name\n{USAGE}"),
            },
            "repos" => match rest.as_slice() {
                [name] => Ok(Command::Repos {
                    name: name.clone(),
                    license: None,
                }),
                [name, flag, key] if flag == "--license" => Ok(Command::Repos {
                    name: name.clone(),
                    license: Some(key.clone()),
                }),
                _ => bail!("repos takes a name and an optional --license KEY\n{USAGE}"),
            },
            "wait" => {
                let (count, max_delay) = parse_counts(&rest)?;
                Ok(Command::Wait { count, max_delay })
            }
            "measure" => {
                let (count, max_delay) = parse_counts(&rest)?;
                Ok(Command::Measure { count, max_delay })
            }
            "generate" if rest.is_empty() => Ok(Command::Generate),
            other => bail!("unknown command: {other}\n{USAGE}"),
        }
    }
}

fn parse_counts(args: &[String]) -> Result<(Option<u32>, Option<u32>)> {
    if args.len() > 2 {
        bail!("expected at most N and MAX_DELAY\n{USAGE}");
    }
    let parse = |index: usize, what: &str| -> Result<Option<u32>> {
        args.get(index)
            .map(|raw| {
                raw.parse::<u32>()
                    .with_context(|| format!("{what} must be a non-negative integer, got {raw:?}"))
            })
            .transpose()
    };
    Ok((parse(0, "N")?, parse(1, "MAX_DELAY")?))
}

fn org_client(config: &OrgkitConfig, name: &str) -> Result<GithubOrgClient> {
    let fetcher =
        HttpFetcher::new(&config.http_settings()).context("failed to build HTTP client")?;
    let base_url = config
        .base_url()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    Ok(GithubOrgClient::with_fetcher(name, base_url, fetcher))
}

async fn run(command: Command, config: &OrgkitConfig) -> Result<()> {
    match command {
        Command::Org { name } => {
            let client = org_client(config, &name)?;
            let org = client.org().await?;
            println!("{}", serde_json::to_string_pretty(org)?);
        }
        Command::Repos { name, license } => {
            let client = org_client(config, &name)?;
            for repo in client.public_repos(license.as_deref()).await? {
                println!("{repo}");
            }
        }
        Command::Wait { count, max_delay } => {
            let count = count.or(config.task_count()).unwrap_or(DEFAULT_TASK_COUNT);
            let max_delay = max_delay.or(config.max_delay()).unwrap_or(DEFAULT_MAX_DELAY);
            for delay in orgkit_tasks::wait_n(count, max_delay).await? {
                println!("{:.3}", delay.as_secs_f64());
            }
        }
        Command::Measure { count, max_delay } => {
            let count = count.or(config.task_count()).unwrap_or(DEFAULT_TASK_COUNT);
            let max_delay = max_delay.or(config.max_delay()).unwrap_or(DEFAULT_MAX_DELAY);
            // measure_time drives its own runtime, so keep it off the async workers.
            let average =
                tokio::task::spawn_blocking(move || orgkit_tasks::measure_time(count, max_delay))
                    .await??;
            println!("{:.3}", average.as_secs_f64());
        }
        Command::Generate => {
            let mut values = Box::pin(orgkit_tasks::async_generator());
            while let Some(value) = values.next().await {
                println!("{value:.3}");
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let command = Command::parse(env::args().skip(1))?;
    let config = match OrgkitConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("Ignoring unusable config: {err}");
            OrgkitConfig::default()
        }
    };

    tracing::debug!(?command, "Running");
    run(command, &config).await
}
