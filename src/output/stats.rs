//! Statistics generation from a crawl result
//!
//! This module provides functionality for summarising and displaying what a
//! crawl found.

use crate::crawler::CrawlResult;
use crate::links::LinkType;
use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Total number of pages recorded
    pub total_pages: u64,

    /// Pages that came from the main-page extractor
    pub main_pages: u64,

    /// Article pages that carry an infobox
    pub pages_with_infobox: u64,

    /// Total number of links across every page
    pub total_links: u64,

    /// Count of links by classification
    pub links_by_type: BTreeMap<LinkType, u64>,

    /// URLs not fetched because their page type is unknown
    pub skipped: u64,

    /// Pages that failed under the skip policy
    pub failures: u64,

    /// Delays issued between fetches
    pub pauses: u64,
}

/// Summarises a crawl result
pub fn compute_statistics(result: &CrawlResult) -> CrawlStatistics {
    let mut stats = CrawlStatistics {
        total_pages: result.pages.len() as u64,
        skipped: result.skipped.len() as u64,
        failures: result.failures.len() as u64,
        pauses: result.pauses,
        ..CrawlStatistics::default()
    };

    for page in &result.pages {
        if page.featured_article.is_some() {
            stats.main_pages += 1;
        }
        if page.infobox.is_some() {
            stats.pages_with_infobox += 1;
        }
        for link in &page.links {
            stats.total_links += 1;
            *stats.links_by_type.entry(link.link_type).or_insert(0) += 1;
        }
    }

    stats
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages recorded: {}", stats.total_pages);
    println!("  Main pages: {}", stats.main_pages);
    println!("  Pages with infobox: {}", stats.pages_with_infobox);
    println!("  Total links found: {}", stats.total_links);
    println!("  Pauses between fetches: {}", stats.pauses);
    println!();

    println!("Links by Type:");
    // Sort types by count (descending)
    let mut type_counts: Vec<_> = stats.links_by_type.iter().collect();
    type_counts.sort_by(|a, b| b.1.cmp(a.1));

    for (link_type, count) in type_counts {
        let percentage = if stats.total_links > 0 {
            (*count as f64 / stats.total_links as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", link_type, count, percentage);
    }
    println!();

    if stats.skipped > 0 {
        println!("Unrecognized pages skipped: {}", stats.skipped);
    }
    if stats.failures > 0 {
        println!("Failed pages: {}", stats.failures);
    }

    let attempted = stats.total_pages + stats.failures;
    let success_rate = if attempted > 0 {
        (stats.total_pages as f64 / attempted as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} pages successfully extracted)",
        success_rate, stats.total_pages, attempted
    );
}
