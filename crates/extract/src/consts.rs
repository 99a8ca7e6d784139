use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// Courses page: current enrollments are listed before past enrollments.
selector!(ACTIVE_COURSES_SELECTOR, "#my_courses_table > tbody > tr > td > a");
selector!(PAST_COURSES_SELECTOR, "#past_enrollments_table > tbody > tr > td > a");
// Modules page: one `div` per module, directly under the container.
selector!(MODULES_SELECTOR, "#context_modules > div");
// Module items: the marker class decides what kind of item it is.
selector!(ATTACHMENT_MARKER_SELECTOR, ".attachment");
selector!(ATTACHMENT_ANCHOR_SELECTOR, "a.for-nvda");
selector!(EXTERNAL_URL_MARKER_SELECTOR, ".external_url");
selector!(EXTERNAL_URL_ANCHOR_SELECTOR, "a.external_url_link");
// Attachment detail page.
selector!(DETAIL_TITLE_SELECTOR, "#content > h2");
selector!(DOWNLOAD_ANCHOR_SELECTOR, "#content > div:nth-of-type(1) > span > a");
