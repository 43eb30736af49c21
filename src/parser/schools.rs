use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::ParseError;

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#schools-index").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Lazy-loaded logos keep their real URL here; `src` is a placeholder.
const LAZY_SRC: &str = "data-src";
const NAME_COLUMN: usize = 2;

/// Extract `(school name, logo url)` pairs from one schools-index page.
///
/// The page must contain `div#schools-index` with a table body. Every row
/// must carry an image with `data-src` and at least three cells; the name is
/// the third cell's text, unmodified.
///
/// The HTML5 parser inserts an implied `<tbody>` into any table, so a table
/// written without one is accepted. Only a container with no table at all
/// fails the body lookup.
pub fn parse_schools_page(html: &str) -> Result<Vec<(String, String)>, ParseError> {
    let doc = Html::parse_document(html);
    let container = doc
        .select(&CONTAINER)
        .next()
        .ok_or(ParseError::Missing("div#schools-index"))?;
    let body = container
        .select(&BODY)
        .next()
        .ok_or(ParseError::Missing("div#schools-index tbody"))?;

    body.select(&ROW)
        .enumerate()
        .map(|(i, row)| {
            let img = row
                .select(&IMG)
                .next()
                .ok_or(ParseError::BadRow { row: i, what: "no img" })?;
            let src = img
                .value()
                .attr(LAZY_SRC)
                .ok_or(ParseError::BadRow { row: i, what: "img has no data-src" })?;
            let name = row
                .select(&CELL)
                .nth(NAME_COLUMN)
                .ok_or(ParseError::BadRow { row: i, what: "fewer than three cells" })?
                .text()
                .collect::<String>();
            Ok((name, src.to_string()))
        })
        .collect()
}
