//! Browser session credentials.
//!
//! Canvas sits behind single sign-on, so rather than logging in, we borrow the
//! cookies of a browser that already has. By default they are read straight
//! out of the browser's own cookie store. Alternatively they can be a raw
//! `Cookie` header copied out of the developer tools, or a Netscape-format
//! `cookies.txt` exported by a browser extension.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use reqwest::Url;
use reqwest::cookie::Jar;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Prefix curl and most exporters put in front of `HttpOnly` cookie lines.
const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// A browser whose cookie store can be read directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Browser {
    #[default]
    Chrome,
    Chromium,
    Brave,
    Edge,
    Firefox,
}
impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Chromium => "chromium",
            Browser::Brave => "brave",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
        }
    }

    /// Reads the cookies the browser holds for `domain` (and its parents).
    fn load(&self, domain: &str) -> Result<Vec<Cookie>> {
        let domains = Some(vec![domain.to_string()]);
        let loaded = match self {
            Browser::Chrome => rookie::chrome(domains),
            Browser::Chromium => rookie::chromium(domains),
            Browser::Brave => rookie::brave(domains),
            Browser::Edge => rookie::edge(domains),
            Browser::Firefox => rookie::firefox(domains),
        };
        match loaded {
            Ok(cookies) => Ok(cookies.into_iter().map(Cookie::from).collect()),
            Err(err) => {
                tracing::warn!(browser = self.as_str(), error = %err, "Could not read cookie store");
                exn::bail!(ErrorKind::CookieStore(self.as_str().to_string()))
            },
        }
    }
}
impl Display for Browser {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Browser {
    type Err = ErrorKind;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "chromium" => Ok(Browser::Chromium),
            "brave" => Ok(Browser::Brave),
            "edge" => Ok(Browser::Edge),
            "firefox" => Ok(Browser::Firefox),
            _ => Err(ErrorKind::UnknownBrowser(name.to_string())),
        }
    }
}

/// Where to find the browser's session cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// The browser's own cookie store.
    Browser(Browser),
    /// A `Cookie` header value: `name=value; other=value`.
    Header(String),
    /// A Netscape-format `cookies.txt`.
    CookieFile(PathBuf),
}

/// A single cookie scoped to a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub domain: String,
    pub path: String,
    pub name: String,
    pub value: String,
    pub secure: bool,
}

impl From<rookie::enums::Cookie> for Cookie {
    fn from(cookie: rookie::enums::Cookie) -> Self {
        Self {
            domain: cookie.domain,
            path: cookie.path,
            name: cookie.name,
            value: cookie.value,
            secure: cookie.secure,
        }
    }
}

impl Cookie {
    /// Renders the cookie as a `Set-Cookie` value, for loading into a [`Jar`].
    fn to_set_cookie(&self) -> String {
        let mut cookie = format!(
            "{}={}; Domain={}; Path={}",
            self.name,
            self.value,
            self.domain.trim_start_matches('.'),
            self.path
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl Credentials {
    /// Collects every cookie that applies to `domain`.
    ///
    /// Finding none is an error: every Canvas page would redirect to the login
    /// screen, so there is no point in continuing.
    pub fn cookies(&self, domain: &str) -> Result<Vec<Cookie>> {
        let cookies = match self {
            Self::Browser(browser) => browser
                .load(domain)?
                .into_iter()
                .filter(|cookie| domain_matches(&cookie.domain, domain))
                .collect(),
            Self::Header(header) => parse_header(header, domain),
            Self::CookieFile(path) => {
                let contents = std::fs::read_to_string(path).or_raise(|| ErrorKind::CookieFile(path.clone()))?;
                parse_netscape(&contents)
                    .into_iter()
                    .filter(|cookie| domain_matches(&cookie.domain, domain))
                    .collect()
            },
        };
        if cookies.is_empty() {
            exn::bail!(ErrorKind::MissingCredential(domain.to_string()));
        }
        tracing::debug!(domain, count = cookies.len(), "Loaded session cookies");
        Ok(cookies)
    }

    /// Loads the cookies for `domain` into a jar that will send them to `base`.
    pub fn jar(&self, domain: &str, base: &Url) -> Result<Jar> {
        let jar = Jar::default();
        for cookie in self.cookies(domain)? {
            jar.add_cookie_str(&cookie.to_set_cookie(), base);
        }
        Ok(jar)
    }
}

fn parse_header(header: &str, domain: &str) -> Vec<Cookie> {
    header
        .trim()
        .trim_start_matches("Cookie:")
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Cookie {
                domain: domain.to_string(),
                path: "/".to_string(),
                name: name.to_string(),
                value: value.trim().to_string(),
                secure: false,
            })
        })
        .collect()
}

/// Parses the tab-separated `cookies.txt` format: domain, include-subdomains
/// flag, path, secure flag, expiry, name, value.
fn parse_netscape(contents: &str) -> Vec<Cookie> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.strip_prefix(HTTP_ONLY_PREFIX).unwrap_or(line);
            if line.trim().is_empty() || line.starts_with('#') {
                return None;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let &[domain, _subdomains, path, secure, _expiry, name, value] = fields.as_slice() else {
                tracing::warn!(line, "Skipping malformed cookie line");
                return None;
            };
            Some(Cookie {
                domain: domain.to_string(),
                path: path.to_string(),
                name: name.to_string(),
                value: value.trim_end().to_string(),
                secure: secure.eq_ignore_ascii_case("TRUE"),
            })
        })
        .collect()
}

/// A cookie set on `.cornell.edu` is sent to `canvas.cornell.edu`.
fn domain_matches(cookie_domain: &str, domain: &str) -> bool {
    let cookie_domain = cookie_domain.trim_start_matches('.');
    domain.eq_ignore_ascii_case(cookie_domain)
        || domain
            .to_ascii_lowercase()
            .ends_with(&format!(".{}", cookie_domain.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    const COOKIES_TXT: &str = "# Netscape HTTP Cookie File\n\
        \n\
        canvas.cornell.edu\tFALSE\t/\tTRUE\t0\tcanvas_session\tabc123\n\
        #HttpOnly_.cornell.edu\tTRUE\t/\tTRUE\t1999999999\tshib_idp\txyz\n\
        example.com\tFALSE\t/\tFALSE\t0\ttracker\tnope\n\
        not-enough\tfields\n";

    #[rstest]
    #[case(".cornell.edu", "canvas.cornell.edu", true)]
    #[case("cornell.edu", "canvas.cornell.edu", true)]
    #[case("canvas.cornell.edu", "canvas.cornell.edu", true)]
    #[case("CANVAS.cornell.edu", "canvas.cornell.edu", true)]
    #[case("notcornell.edu", "canvas.cornell.edu", false)]
    #[case("other.cornell.edu", "canvas.cornell.edu", false)]
    #[case("example.com", "canvas.cornell.edu", false)]
    fn test_domain_matches(#[case] cookie_domain: &str, #[case] domain: &str, #[case] expected: bool) {
        assert_eq!(domain_matches(cookie_domain, domain), expected);
    }

    #[rstest]
    #[case("chrome", Browser::Chrome)]
    #[case("Firefox", Browser::Firefox)]
    #[case(" edge ", Browser::Edge)]
    #[case("brave", Browser::Brave)]
    #[case("chromium", Browser::Chromium)]
    fn test_browser_from_str(#[case] name: &str, #[case] expected: Browser) {
        assert_eq!(name.parse::<Browser>().unwrap(), expected);
        assert_eq!(expected.to_string().parse::<Browser>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_browser() {
        assert_eq!("netscape".parse::<Browser>(), Err(ErrorKind::UnknownBrowser("netscape".into())));
        assert_eq!(Browser::default(), Browser::Chrome);
    }

    #[test]
    fn test_browser_cookie_mapping() {
        let stored = rookie::enums::Cookie {
            domain: ".cornell.edu".into(),
            path: "/".into(),
            secure: true,
            expires: Some(1_999_999_999),
            name: "shib_idp".into(),
            value: "xyz".into(),
            http_only: true,
            same_site: 0,
        };
        let cookie = Cookie::from(stored);
        assert_eq!(
            cookie,
            Cookie {
                domain: ".cornell.edu".into(),
                path: "/".into(),
                name: "shib_idp".into(),
                value: "xyz".into(),
                secure: true,
            }
        );
        assert!(domain_matches(&cookie.domain, "canvas.cornell.edu"));
        assert_eq!(cookie.to_set_cookie(), "shib_idp=xyz; Domain=cornell.edu; Path=/; Secure");
    }

    #[test]
    fn test_parse_header() {
        let cookies = parse_header("canvas_session=abc; _csrf_token=a%3Db ; =orphan; junk", "canvas.cornell.edu");
        let pairs: Vec<_> = cookies.iter().map(|c| (c.name.as_str(), c.value.as_str())).collect();
        assert_eq!(pairs, [("canvas_session", "abc"), ("_csrf_token", "a%3Db")]);
        assert!(cookies.iter().all(|c| c.domain == "canvas.cornell.edu" && c.path == "/"));
    }

    #[test]
    fn test_parse_header_with_prefix() {
        let cookies = parse_header("Cookie: a=1", "x.edu");
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "a");
    }

    #[test]
    fn test_parse_netscape() {
        let cookies = parse_netscape(COOKIES_TXT);
        let names: Vec<_> = cookies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["canvas_session", "shib_idp", "tracker"]);
        assert!(cookies[0].secure);
        assert!(!cookies[2].secure);
        assert_eq!(cookies[1].domain, ".cornell.edu");
    }

    #[test]
    fn test_cookie_file_filters_by_domain() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COOKIES_TXT.as_bytes()).unwrap();

        let cookies = Credentials::CookieFile(file.path().to_path_buf())
            .cookies("canvas.cornell.edu")
            .unwrap();
        let names: Vec<_> = cookies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["canvas_session", "shib_idp"]);
    }

    #[test]
    fn test_no_cookies_for_domain() {
        let err = Credentials::Header("  ".into()).cookies("canvas.cornell.edu").unwrap_err();
        assert_eq!(*err, ErrorKind::MissingCredential("canvas.cornell.edu".into()));
    }

    #[test]
    fn test_missing_cookie_file() {
        let path = PathBuf::from("/definitely/not/here/cookies.txt");
        let err = Credentials::CookieFile(path.clone()).cookies("x.edu").unwrap_err();
        assert_eq!(*err, ErrorKind::CookieFile(path));
    }

    #[test]
    fn test_set_cookie_rendering() {
        let cookie = Cookie {
            domain: ".cornell.edu".into(),
            path: "/".into(),
            name: "a".into(),
            value: "b".into(),
            secure: true,
        };
        assert_eq!(cookie.to_set_cookie(), "a=b; Domain=cornell.edu; Path=/; Secure");
    }

    #[test]
    fn test_jar_sends_cookies_to_base() {
        use reqwest::cookie::CookieStore;

        let base = Url::parse("https://canvas.cornell.edu").unwrap();
        let jar = Credentials::Header("a=1; b=2".into())
            .jar("canvas.cornell.edu", &base)
            .unwrap();
        let header = jar.cookies(&base.join("/courses").unwrap()).unwrap();
        let header = header.to_str().unwrap();
        assert!(header.contains("a=1"));
        assert!(header.contains("b=2"));
    }
}
