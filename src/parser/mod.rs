pub mod roster;
pub mod schools;
pub mod team;

/// Markup on a schools-index page did not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no element matching `{0}`")]
    Missing(&'static str),
    #[error("row {row}: {what}")]
    BadRow { row: usize, what: &'static str },
}
