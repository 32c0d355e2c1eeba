//! Output module for crawl results
//!
//! This module handles:
//! - Writing the crawl result as JSON
//! - Summarising a crawl into statistics for the terminal

pub mod stats;

pub use stats::{compute_statistics, print_statistics, CrawlStatistics};

use crate::crawler::CrawlResult;
use crate::CrawlError;
use std::io::Write;

/// Writes the crawl result as a single JSON document
///
/// # Arguments
///
/// * `result` - The finished (or partial) crawl
/// * `writer` - Destination, typically stdout
/// * `pretty` - Indent the output for humans
///
/// # Returns
///
/// * `Ok(())` - The document was written and flushed
/// * `Err(CrawlError)` - Serialization or the write failed
pub fn write_json<W: Write>(
    result: &CrawlResult,
    mut writer: W,
    pretty: bool,
) -> Result<(), CrawlError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, result)?;
    } else {
        serde_json::to_writer(&mut writer, result)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::PageFailure;
    use crate::page::fixtures::wiki_page;
    use crate::page::parse_wiki_page;

    fn sample_result() -> CrawlResult {
        let page = parse_wiki_page(
            "https://omnipedia.app/wiki/2049-10-01/Physics",
            &wiki_page("Physics", r#"<a href="/wiki/2049-10-01/Energy">Energy</a>"#),
        )
        .unwrap();

        CrawlResult {
            pages: vec![page],
            skipped: vec!["https://omnipedia.app/changes/Physics".to_string()],
            failures: vec![PageFailure {
                url: "https://omnipedia.app/wiki/2049-10-01/Gone".to_string(),
                error: "HTTP status 404".to_string(),
            }],
            pauses: 1,
        }
    }

    #[test]
    fn test_write_json_compact() {
        let mut buffer = Vec::new();
        write_json(&sample_result(), &mut buffer, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let page = &value["pages"][0];
        assert_eq!(page["url_path"], "/wiki/2049-10-01/Physics");
        assert_eq!(page["entry_title"], "Physics");
        assert_eq!(page["toc"]["History"], "#history");
        assert!(page["infobox"].is_null());
        assert!(page.get("news").is_none());
        assert_eq!(value["pauses"], 1);
        assert_eq!(value["failures"][0]["error"], "HTTP status 404");
    }

    #[test]
    fn test_write_json_link_fields() {
        let mut buffer = Vec::new();
        write_json(&sample_result(), &mut buffer, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let links = value["pages"][0]["links"].as_array().unwrap();
        let energy = links
            .iter()
            .find(|link| link["link_text"] == "Energy")
            .unwrap();
        assert_eq!(energy["type"], "wiki_page_link");
        assert_eq!(energy["url"], "/wiki/2049-10-01/Energy");
    }

    #[test]
    fn test_write_json_pretty_is_multiline() {
        let mut buffer = Vec::new();
        write_json(&CrawlResult::default(), &mut buffer, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().count() > 1);
        assert!(text.contains("\"pages\": []"));
    }
}
