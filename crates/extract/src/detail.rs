use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::models::DetailPage;
use exn::OptionExt;
use scraper::Html;
use tracing::instrument;

/// Extracts the authoritative title and the download link from an
/// attachment's detail page.
///
/// # Errors
///
/// Returns an error if the page has no `h2` heading directly inside
/// `#content`, or no link in the first content `div`'s `span`.
#[instrument(level = "debug", skip(document))]
pub fn detail(document: &Html) -> Result<DetailPage> {
    let title = document
        .select(&consts::DETAIL_TITLE_SELECTOR)
        .next()
        .map(|heading| crate::text_of(&heading))
        .ok_or_raise(|| ErrorKind::MissingElement("document title"))?;
    let download_href = document
        .select(&consts::DOWNLOAD_ANCHOR_SELECTOR)
        .next()
        .ok_or_raise(|| ErrorKind::MissingElement("download link"))?
        .attr("href")
        .ok_or_raise(|| ErrorKind::MissingAttribute {
            element: "download link",
            attribute: "href",
        })?;
    Ok(DetailPage {
        title,
        download_href: download_href.to_string(),
    })
}
