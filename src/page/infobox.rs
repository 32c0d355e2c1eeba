use crate::page::markers;
use crate::page::text::{collapsed_text, find_all, find_first, next_element_after, raw_text, require};
use crate::ExtractError;
use scraper::{ElementRef, Html};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// The key/value summary block of an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoboxRecord {
    pub name: String,
    pub infobox_table: InfoboxTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<InfoboxMedia>,
}

/// Infobox rows in page order
///
/// Serialises as a JSON object whose keys keep the order of the `dt` labels.
/// Re-inserting a label replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoboxTable {
    rows: Vec<(String, String)>,
}

impl InfoboxTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `label`, keeping the row's original position
    pub fn insert(&mut self, label: String, value: String) {
        match self.rows.iter_mut().find(|(key, _)| *key == label) {
            Some((_, existing)) => *existing = value,
            None => self.rows.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Rows in page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Index<&str> for InfoboxTable {
    type Output = String;

    fn index(&self, label: &str) -> &String {
        match self.rows.iter().find(|(key, _)| key == label) {
            Some((_, value)) => value,
            None => panic!("no infobox row labelled {:?}", label),
        }
    }
}

impl Serialize for InfoboxTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (key, value) in &self.rows {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The image shown in an infobox's "Media" row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoboxMedia {
    pub text: String,
    pub src: String,
    pub alt_text: String,
}

/// Extracts the infobox, if the page has one
///
/// Each `dt` label maps to the collapsed text of the next `dd`. The `Media`
/// label is hoisted into [`InfoboxRecord::media`] instead of the table, and is
/// always read from the `dd` that follows the *first* `dt` of the infobox,
/// whichever `dt` carries the label. Rows keep their page order.
///
/// # Errors
///
/// [`ExtractError::MissingElement`] if the infobox exists but has no name, or
/// if a `Media` row is present and the media description has no `a img`.
pub fn extract_infobox(document: &Html) -> Result<Option<InfoboxRecord>, ExtractError> {
    let Some(infobox) = find_first(document.root_element(), markers::INFOBOX)? else {
        return Ok(None);
    };

    let name = raw_text(require(infobox, markers::INFOBOX_NAME, "infobox name")?);

    let mut record = InfoboxRecord {
        name,
        ..InfoboxRecord::default()
    };

    for term in find_all(infobox, markers::INFOBOX_TERM)? {
        let label = raw_text(term);
        if label == markers::INFOBOX_MEDIA_LABEL {
            record.media = Some(extract_media(infobox)?);
        } else {
            let value = next_element_after(infobox, term, markers::INFOBOX_DESCRIPTION)
                .map(collapsed_text)
                .unwrap_or_default();
            record.infobox_table.insert(label, value);
        }
    }

    Ok(Some(record))
}

fn extract_media(infobox: ElementRef<'_>) -> Result<InfoboxMedia, ExtractError> {
    let first_term = require(infobox, markers::INFOBOX_TERM, "infobox term")?;
    let description = next_element_after(infobox, first_term, markers::INFOBOX_DESCRIPTION)
        .ok_or(ExtractError::MissingElement("infobox media description"))?;
    let image = require(description, markers::INFOBOX_MEDIA_IMAGE, "infobox media image")?;

    let attr = |name: &str| image.value().attr(name).unwrap_or_default().to_string();

    Ok(InfoboxMedia {
        text: collapsed_text(description),
        src: attr("src"),
        alt_text: attr("alt"),
    })
}
