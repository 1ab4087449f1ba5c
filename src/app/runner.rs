use rand::seq::SliceRandom;
use rand::thread_rng;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::AppResult;

use super::sampler::sample_count;

const SEPARATOR: &str = "--------------------------------------";

/// Fetches `/tag/<tag>` for a random sample of the tag list, printing each
/// response as it arrives. Tags are drawn with replacement, so one tag may be
/// tested several times in a run while others are skipped. Requests run one
/// at a time, in draw order, with no timeout and no retry.
///
/// # Errors
///
/// Returns an error when a request cannot be completed.
pub async fn run_tests(config: &Config, tags: &[String]) -> AppResult<()> {
    let number_of_tests = sample_count(config.percent_cover, tags.len());
    println!(
        "Testing {} tags out of {} ({}%)",
        number_of_tests,
        tags.len(),
        config.percent_cover
    );

    let client = Client::new();
    for i in 0..number_of_tests {
        let Some(tag) = tags.choose(&mut thread_rng()) else {
            break;
        };
        // The tag goes into the path as-is, with no percent-encoding.
        let tag_path = format!("/tag/{}", tag);
        println!("Test[{}]: Testing tag {} ({})", i, tag, tag_path);

        let url = format!("{}{}", config.external_url, tag_path);
        debug!("GET {}", url);
        let response = client.get(&url).send().await?;
        let status = response.status();
        println!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
        println!("{}", SEPARATOR);
        println!("{}", response.text().await?);
        println!("{}", SEPARATOR);
    }

    Ok(())
}
