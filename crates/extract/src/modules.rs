use crate::consts;
use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use scraper::{ElementRef, Html};
use tracing::instrument;

/// One module from a course's modules page.
///
/// The items are borrowed straight out of the parsed document and are only
/// meant to live as long as one pass over the module; see
/// [`is_attachment`](crate::is_attachment) and friends for reading them.
#[derive(Debug, Clone)]
pub struct ModuleEntry<'a> {
    /// Module name, as read out to screen readers
    pub title: String,
    /// The module's list items, in page order
    pub items: Vec<ElementRef<'a>>,
}

/// Extracts every module from a course's modules page.
///
/// Each module container must carry an `aria-label` and hold its items in
/// the `ul` directly inside its second `div` child.
///
/// # Errors
///
/// Returns an error as soon as any module is missing its label or its item
/// list; there's no skipping of malformed modules.
#[instrument(level = "debug", skip(document))]
pub fn modules(document: &Html) -> Result<Vec<ModuleEntry<'_>>> {
    document.select(&consts::MODULES_SELECTOR).map(module).collect()
}

fn module(container: ElementRef<'_>) -> Result<ModuleEntry<'_>> {
    let title = container.attr("aria-label").ok_or_raise(|| ErrorKind::MissingAttribute {
        element: "module",
        attribute: "aria-label",
    })?;
    let list = container
        .child_elements()
        .filter(|child| child.value().name() == "div")
        .nth(1)
        .and_then(|content| content.child_elements().find(|child| child.value().name() == "ul"))
        .ok_or_raise(|| ErrorKind::MissingElement("module item list"))?;
    tracing::trace!(module = title, "Found module item list");
    Ok(ModuleEntry {
        title: title.trim().to_string(),
        items: list.child_elements().collect(),
    })
}
