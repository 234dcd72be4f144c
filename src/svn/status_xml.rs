use crate::domain::StatusEntry;
use crate::error::Result;

/// Parses `svn status -v --xml` output into status entries.
///
/// Reads the `revision` attribute of each entry's `wc-status`. Entries without
/// one (unversioned, added) are kept at revision 0.
pub fn parse_status_xml(xml: &str) -> Result<Vec<StatusEntry>> {
    let doc = roxmltree::Document::parse(xml)?;

    let entries = doc
        .descendants()
        .filter(|n| n.has_tag_name("target"))
        .flat_map(|target| target.children().filter(|n| n.has_tag_name("entry")))
        .filter_map(|entry| {
            let path = entry.attribute("path")?;
            let revision = entry
                .children()
                .find(|n| n.has_tag_name("wc-status"))
                .and_then(|wc| wc.attribute("revision"))
                .and_then(|rev| rev.parse::<u64>().ok())
                .unwrap_or(0);
            Some(StatusEntry::new(path, revision))
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<status>
<target path="wc">
<entry path="wc">
<wc-status item="normal" revision="12" props="none">
<commit revision="10"><author>me</author><date>2024-01-01T00:00:00.000000Z</date></commit>
</wc-status>
</entry>
<entry path="wc/a.txt">
<wc-status item="modified" revision="14" props="none">
<commit revision="14"><author>me</author></commit>
</wc-status>
</entry>
<entry path="wc/new.txt">
<wc-status item="unversioned" props="none"></wc-status>
</entry>
</target>
</status>
"#;

    #[test]
    fn test_parse_status_xml() {
        let entries = parse_status_xml(STATUS).unwrap();
        assert_eq!(
            entries,
            vec![
                StatusEntry::new("wc", 12),
                StatusEntry::new("wc/a.txt", 14),
                StatusEntry::new("wc/new.txt", 0),
            ]
        );
    }

    #[test]
    fn test_parse_status_xml_empty_target() {
        let xml = r#"<?xml version="1.0"?><status><target path="."></target></status>"#;
        assert!(parse_status_xml(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_status_xml_malformed() {
        assert!(parse_status_xml("<status><target>").is_err());
    }
}
