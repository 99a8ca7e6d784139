use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not start an authenticated session")]
    Session,
    #[display("could not open output directory")]
    Storage,
    #[display("crawl aborted")]
    Crawl,
}
