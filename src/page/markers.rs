//! CSS selectors for the structural markers Omnipedia pages carry

pub const PAGE_TITLE: &str = "title";
pub const CURRENT_DATE: &str = "time.omnipedia-current-date";
pub const CURRENT_DATE_ATTR: &str = "datetime";
pub const ENTRY_TITLE: &str =
    "span.field.field--name-title.field--type-string.field--label-hidden";
pub const ANCHOR: &str = "a";

pub const INFOBOX: &str = "div.omnipedia-infobox";
pub const INFOBOX_NAME: &str = "strong.omnipedia-infobox__name";
pub const INFOBOX_TERM: &str = "dt";
pub const INFOBOX_DESCRIPTION: &str = "dd";
pub const INFOBOX_MEDIA_LABEL: &str = "Media";
pub const INFOBOX_MEDIA_IMAGE: &str = "a img";

pub const TABLE_OF_CONTENTS: &str = "div.table-of-contents";

pub const FEATURED_ARTICLE_CONTENT: &str = ".omnipedia-featured-article__content";
pub const FEATURED_ARTICLE_LINK: &str = ".omnipedia-featured-article__link";
pub const NEWS_CONTENT: &str = ".omnipedia-news__content";
pub const NEWS_ITEM: &str = "li";
