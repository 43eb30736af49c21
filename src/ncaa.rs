use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::fetch::{join_url, PageFetcher};
use crate::logos::LogoMap;
use crate::output;
use crate::parser::schools::parse_schools_page;

pub const DEFAULT_URL: &str = "https://www.ncaa.com/schools-index/";
pub const OUTPUT_FILE: &str = "logos_ncaa.json";

/// Walk `<base_url>/0`, `<base_url>/1`, ... until a page is not HTTP 200.
///
/// A non-200 status is the end-of-data signal, so a transient error
/// mid-run ends collection early. Later pages win on duplicate names.
pub fn collect_logos<F: PageFetcher>(fetcher: &F, base_url: &str) -> Result<LogoMap> {
    let mut logos = LogoMap::new();
    let mut index = 0usize;

    loop {
        let url = join_url(base_url, &index.to_string());
        let page = fetcher.get(&url)?;
        if !page.is_ok() {
            info!("Stopped at {} (HTTP {}) after {} pages", url, page.status, index);
            break;
        }

        let rows = parse_schools_page(&page.body)
            .with_context(|| format!("Malformed schools index page {}", url))?;
        debug!("Page {}: {} schools", index, rows.len());
        logos.extend(rows);
        index += 1;
    }

    Ok(logos)
}

/// Collect, optionally empty `out_dir`, then write `logos_ncaa.json`.
pub fn run<F: PageFetcher>(fetcher: &F, base_url: &str, out_dir: &Path, clean: bool) -> Result<LogoMap> {
    let logos = collect_logos(fetcher, base_url)?;
    if clean {
        output::reset_dir(out_dir)?;
    }
    output::write_logos(out_dir, OUTPUT_FILE, &logos)?;
    Ok(logos)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::fetch::testing::FakeFetcher;

    const BASE: &str = "https://www.ncaa.com/schools-index/";

    fn fixture(name: &str) -> String {
        fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    fn one_row(name: &str, src: &str) -> String {
        format!(
            r#"<div id="schools-index"><table><tbody>
               <tr><td><img data-src="{}"></td><td></td><td>{}</td></tr>
               </tbody></table></div>"#,
            src, name
        )
    }

    #[test]
    fn stops_at_first_non_200() {
        let fetcher = FakeFetcher::scripted(vec![
            (200, one_row("A", "a.png")),
            (200, one_row("B", "b.png")),
            (200, one_row("C", "c.png")),
            (404, one_row("D", "d.png")),
            (200, one_row("E", "e.png")),
        ]);

        let logos = collect_logos(&fetcher, BASE).unwrap();
        assert_eq!(
            fetcher.requested(),
            vec![
                "https://www.ncaa.com/schools-index/0",
                "https://www.ncaa.com/schools-index/1",
                "https://www.ncaa.com/schools-index/2",
                "https://www.ncaa.com/schools-index/3",
            ]
        );
        assert_eq!(logos.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn later_page_wins_on_duplicate() {
        let fetcher = FakeFetcher::default()
            .with_page("https://www.ncaa.com/schools-index/0", 200, &fixture("schools_index_0"))
            .with_page("https://www.ncaa.com/schools-index/1", 200, &fixture("schools_index_1"));

        let logos = collect_logos(&fetcher, BASE).unwrap();
        assert_eq!(logos.len(), 4);
        assert!(logos["Akron"].ends_with("akron-v2.svg"));
        assert_eq!(fetcher.requested().len(), 3);
    }

    #[test]
    fn empty_source_gives_empty_map() {
        let fetcher = FakeFetcher::scripted(vec![(503, String::new())]);
        assert!(collect_logos(&fetcher, "http://localhost/idx").unwrap().is_empty());
        assert_eq!(fetcher.requested(), vec!["http://localhost/idx/0"]);
    }

    #[test]
    fn malformed_page_propagates() {
        let fetcher = FakeFetcher::scripted(vec![
            (200, one_row("A", "a.png")),
            (200, "<html><body>redesigned</body></html>".to_string()),
        ]);
        let err = collect_logos(&fetcher, BASE).unwrap_err();
        assert!(format!("{:#}", err).contains("schools-index/1"));
    }

    #[test]
    fn run_writes_fixed_file_and_cleans() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("stale.json"), "{}").unwrap();
        let fetcher = FakeFetcher::default()
            .with_page("https://www.ncaa.com/schools-index/0", 200, &fixture("schools_index_0"));

        let logos = run(&fetcher, BASE, tmp.path(), true).unwrap();
        assert_eq!(logos.len(), 3);

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![OUTPUT_FILE]);

        let written: LogoMap =
            serde_json::from_str(&fs::read_to_string(tmp.path().join(OUTPUT_FILE)).unwrap()).unwrap();
        assert_eq!(written, logos);
    }

    #[test]
    fn run_without_clean_keeps_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("keep.txt"), "x").unwrap();
        let fetcher = FakeFetcher::default();

        run(&fetcher, BASE, tmp.path(), false).unwrap();
        assert!(tmp.path().join("keep.txt").exists());
        assert!(tmp.path().join(OUTPUT_FILE).exists());
    }
}
