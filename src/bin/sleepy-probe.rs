use std::time::{Duration, Instant};

use clap::Parser;
use futures_util::future::join_all;

#[derive(Parser)]
#[command(name = "sleepy-probe")]
#[command(about = "Fire concurrent delay requests at a sleepy-server", long_about = None)]
struct Cli {
    /// Server base URL.
    #[arg(short, long, default_value = "http://127.0.0.1:8081")]
    url: String,

    /// Delay in seconds, sent verbatim as the path segment.
    #[arg(short, long, default_value = "1")]
    delay: String,

    /// Number of simultaneous requests.
    #[arg(short, long, default_value_t = 2)]
    concurrency: usize,
}

struct Outcome {
    index: usize,
    status: reqwest::StatusCode,
    body: String,
    elapsed: Duration,
}

async fn probe(client: reqwest::Client, url: String, index: usize) -> Result<Outcome, reqwest::Error> {
    let started = Instant::now();
    let res = client.get(&url).send().await?;
    let status = res.status();
    let body = res.text().await?;

    Ok(Outcome {
        index,
        status,
        body,
        elapsed: started.elapsed(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let url = format!("{}/{}", cli.url.trim_end_matches('/'), cli.delay);

    let started = Instant::now();
    let results = join_all((0..cli.concurrency).map(|i| probe(client.clone(), url.clone(), i))).await;
    let total = started.elapsed();

    let mut failures = 0;
    for result in results {
        match result {
            Ok(outcome) => {
                println!(
                    "#{} {} in {:.3}s: {}",
                    outcome.index,
                    outcome.status,
                    outcome.elapsed.as_secs_f64(),
                    outcome.body.trim_end()
                );
                if !outcome.status.is_success() {
                    failures += 1;
                }
            }
            Err(e) => {
                eprintln!("Error: request failed: {}", e);
                failures += 1;
            }
        }
    }

    println!("{} requests in {:.3}s", cli.concurrency, total.as_secs_f64());

    if failures > 0 {
        return Err(format!("{} request(s) failed", failures).into());
    }
    Ok(())
}
