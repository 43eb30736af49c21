use std::sync::LazyLock;

use scraper::{Html, Selector};

static META: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div#meta").unwrap());
static LOGO: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.teamlogo").unwrap());

/// Logo `src` from a team page's metadata block, if the page has one.
pub fn parse_team_logo(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let meta = doc.select(&META).next()?;
    let img = meta.select(&LOGO).next()?;
    img.value().attr("src").map(str::to_string)
}
