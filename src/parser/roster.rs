use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static SCHOOL_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[data-stat="school_name"] a[href]"#).unwrap());
static SCHOOL_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/cbb/schools/([a-z0-9-]+)/").unwrap());

/// Team abbreviations linked from a season school-stats table, upper-cased,
/// first occurrence order, no duplicates.
pub fn parse_team_ids(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();

    doc.select(&SCHOOL_LINK)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let slug = SCHOOL_HREF.captures(href)?.get(1)?.as_str();
            Some(slug.to_uppercase())
        })
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_table_ids() {
        let html = std::fs::read_to_string("tests/fixtures/school_stats.html").unwrap();
        assert_eq!(
            parse_team_ids(&html),
            vec!["ABILENE-CHRISTIAN", "AIR-FORCE", "AKRON", "DUKE"]
        );
    }

    #[test]
    fn ignores_links_outside_school_column() {
        let html = r#"<table><tr>
            <td data-stat="conf_abbr"><a href="/cbb/schools/fake/2024.html">x</a></td>
            <td data-stat="school_name"><a href="/cbb/conferences/acc/2024.html">ACC</a></td>
            </tr></table>"#;
        assert!(parse_team_ids(html).is_empty());
    }
}
