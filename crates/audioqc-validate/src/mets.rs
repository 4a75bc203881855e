//! The METS rule engine.
//!
//! One fixed institutional profile for digitized audio recordings: six
//! section validators walked in order over each item's parsed METS
//! document, built from shared existence/equality/cardinality primitives.
//! Every violation is recorded into the [`FindingLog`] attributed to
//! (document path, item id); validators keep going past data faults and
//! short-circuit only when their own section is missing.

use std::path::PathBuf;

use thiserror::Error;

use audioqc_model::{FileCategory, FindingLog, Item, ItemMetadata, Project, ProjectMetadata};

use crate::dates::parse_flexible_date;
use crate::text::normalize;
use crate::xml::{Document, Element};

/// Namespace prefixes every conforming METS root must declare, with their
/// exact URIs. Iteration order is fixed so findings come out in a stable
/// order.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("mets", "http://www.loc.gov/METS/"),
    ("dc", "http://purl.org/dc/elements/1.1"),
    ("aes", "http://www.aes.org/audioObject"),
    ("ph", "http://www.aes.org/processhistory"),
    ("mods", "http://www.loc.gov/mods/v3"),
    ("xlink", "http://www.w3.org/1999/xlink"),
];

const ORGANIZATION_NAME: &str = "University of Michigan, Bentley Historical Library";
const VENDOR_NAME: &str = "The MediaPreserve";
const EXPECTED_FILE_GROUP_IDS: [&str; 2] = ["audio-files", "media_images"];

/// Comparison vocabulary for attribute rules. Only `Exists` and `Is` are
/// implemented; dispatching any other variant is a configuration fault,
/// not a data fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Exists,
    Is,
    IsNot,
    Contains,
}

/// A fault in the rule definitions themselves. Unlike data faults, which
/// are recorded and skipped past, this aborts the whole run.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("unsupported comparison {comparison:?} for {attribute} attribute check")]
    UnsupportedComparison {
        comparison: Comparison,
        attribute: String,
    },
}

/// Validates every item's METS document against the institutional profile.
pub struct MetsValidator<'a> {
    metadata: &'a ProjectMetadata,
    log: &'a mut FindingLog,
}

impl<'a> MetsValidator<'a> {
    pub fn new(metadata: &'a ProjectMetadata, log: &'a mut FindingLog) -> Self {
        Self { metadata, log }
    }

    /// Validate one item's METS document.
    ///
    /// Items without an XML file are skipped; the directory-structure pass
    /// owns that finding. A document that fails to parse gets one error
    /// and no further checks. Otherwise all six section validators run in
    /// order, regardless of one another's outcomes.
    pub fn validate_item(&mut self, item: &Item) -> Result<(), RuleConfigError> {
        let Some(mets_file) = item.mets_file() else {
            return Ok(());
        };
        let path = item.path.join(mets_file);

        let doc = match Document::parse_file(&path) {
            Ok(doc) => doc,
            Err(error) => {
                tracing::debug!(item = %item.id, %error, "mets document failed to parse");
                self.log
                    .error(&path, &item.id, "mets xml is not valid".to_string());
                return Ok(());
            }
        };

        tracing::debug!(item = %item.id, "validating mets document");

        let mut checks = ItemChecks {
            log: &mut *self.log,
            path,
            item_id: item.id.clone(),
            item,
            metadata: self.metadata.for_item(&item.id),
        };

        checks.validate_root(&doc)?;
        checks.validate_header(&doc)?;
        checks.validate_descriptive_metadata(&doc)?;
        checks.validate_administrative_metadata(&doc)?;
        checks.validate_file_section(&doc)?;
        checks.validate_structural_map(&doc)?;

        Ok(())
    }
}

/// Validate every item of a project, accumulating findings into the log.
pub fn validate_project(
    project: &Project,
    log: &mut FindingLog,
) -> Result<(), RuleConfigError> {
    let mut validator = MetsValidator::new(&project.metadata, log);
    for item in &project.items {
        validator.validate_item(item)?;
    }
    Ok(())
}

/// Per-item validation state: the document path and identifiers every
/// finding is attributed to.
struct ItemChecks<'a> {
    log: &'a mut FindingLog,
    path: PathBuf,
    item_id: String,
    item: &'a Item,
    metadata: Option<&'a ItemMetadata>,
}

impl ItemChecks<'_> {
    // ---- primitives -----------------------------------------------------

    /// Locate exactly one element by absolute path. Zero matches and
    /// multiple matches are both violations; either way no element comes
    /// back.
    fn find_element<'d>(&mut self, doc: &'d Document, path: &str) -> Option<&'d Element> {
        let matches = doc.find_all(path, NAMESPACES);
        match matches.len() {
            0 => {
                self.log.error(
                    &self.path,
                    &self.item_id,
                    format!("mets xml has no element {path}"),
                );
                None
            }
            1 => Some(matches[0]),
            _ => {
                self.log.error(
                    &self.path,
                    &self.item_id,
                    format!("mets xml has multiple {path} elements"),
                );
                None
            }
        }
    }

    /// Locate a single subelement by relative path.
    fn find_subelement<'d>(&mut self, parent: &'d Element, path: &str) -> Option<&'d Element> {
        let subelement = parent.find(path, NAMESPACES);
        if subelement.is_none() {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "subelement {path} not found in {}",
                    parent.qualified_name()
                ),
            );
        }
        subelement
    }

    /// Locate subelements by relative path, optionally requiring an exact
    /// count.
    fn find_subelements<'d>(
        &mut self,
        parent: &'d Element,
        path: &str,
        expected: Option<usize>,
    ) -> Option<Vec<&'d Element>> {
        let subelements = parent.find_all(path, NAMESPACES);
        if let Some(expected) = expected
            && subelements.len() != expected
        {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "{} {path} subelements found in {}, expected {expected}",
                    subelements.len(),
                    parent.qualified_name()
                ),
            );
            return None;
        } else if subelements.is_empty() {
            self.log.error(
                &self.path,
                &self.item_id,
                format!("No {path} subelements found in {}", parent.qualified_name()),
            );
            return None;
        }
        Some(subelements)
    }

    /// Attribute check dispatcher.
    fn check_attr(
        &mut self,
        element: &Element,
        name: &str,
        comparison: Comparison,
        expected: Option<&str>,
    ) -> Result<(), RuleConfigError> {
        match comparison {
            Comparison::Exists => {
                self.check_attr_exists(element, name);
            }
            Comparison::Is => {
                // Equality only makes sense once existence is confirmed
                if self.check_attr_exists(element, name)
                    && let Some(expected) = expected
                {
                    self.check_attr_equals(element, name, expected);
                }
            }
            other => {
                return Err(RuleConfigError::UnsupportedComparison {
                    comparison: other,
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_attr_exists(&mut self, element: &Element, name: &str) -> bool {
        if element.has_attr(name) {
            return true;
        }
        self.log.error(
            &self.path,
            &self.item_id,
            format!(
                "{name} attribute does not exists in {}",
                element.qualified_name()
            ),
        );
        false
    }

    fn check_attr_equals(&mut self, element: &Element, name: &str, expected: &str) {
        let actual = element.attr(name).unwrap_or_default();
        if actual != expected {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "{actual} in {name} attribute does not equal {expected} value in {}",
                    element.qualified_name()
                ),
            );
        }
    }

    /// Compare an element's text against an expected value, both sides
    /// normalized. Only the `Is` comparison does anything.
    fn check_text(&mut self, element: &Element, comparison: Comparison, expected: &str) {
        let actual = normalize(element.text());
        let expected = normalize(Some(expected));
        if comparison == Comparison::Is && actual != expected {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "{actual} text does not equal {expected} value in {}",
                    element.qualified_name()
                ),
            );
        }
    }

    /// Reconcile a spreadsheet date with a METS date.
    fn check_dates(&mut self, metadata_date: &str, mets_date: &str) {
        let metadata_date = normalize(Some(metadata_date));

        // An "Undated"/"undated" pair counts as matching. That case is not
        // short-circuited: it falls through to the comparison below, where
        // neither side parses to a date, so the pair is never flagged.

        // The retry with the last character dropped tolerates a trailing
        // encoding artifact seen in real exports
        let mut truncated = metadata_date.clone();
        truncated.pop();

        let parsed_mets = parse_flexible_date(mets_date);
        if parse_flexible_date(&metadata_date) != parsed_mets
            && parse_flexible_date(&truncated) != parsed_mets
        {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "{metadata_date} date in metadata export does not equal {mets_date} date in mets"
                ),
            );
        }
    }

    // ---- section validators ---------------------------------------------

    /// Root element: required namespace declarations, OBJID, TYPE.
    fn validate_root(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(mets) = self.find_element(doc, "/mets:mets") else {
            return Ok(());
        };

        let namespace_map = mets.namespace_map();
        for (prefix, uri) in NAMESPACES {
            if namespace_map.get(*prefix).map(String::as_str) != Some(*uri) {
                self.log.error(
                    &self.path,
                    &self.item_id,
                    format!("mets xml is missing the following namespace: {prefix}:{uri}"),
                );
            }
        }

        let item_id = self.item_id.clone();
        self.check_attr(mets, "OBJID", Comparison::Is, Some(&item_id))?;
        // The profile covers audio recordings only
        self.check_attr(mets, "TYPE", Comparison::Is, Some("AUDIO RECORDING"))?;

        Ok(())
    }

    /// metsHdr: creation date plus the three fixed agents, in document
    /// order. Matching is positional, never by role, so out-of-order
    /// agents are reported as attribute mismatches.
    fn validate_header(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(header) = self.find_element(doc, "/mets:mets/mets:metsHdr") else {
            return Ok(());
        };

        self.check_attr(header, "CREATEDATE", Comparison::Exists, None)?;

        let Some(agents) = self.find_subelements(header, "mets:agent", Some(3)) else {
            return Ok(());
        };

        // Digitization vendor
        let vendor = agents[0];
        self.check_attr(vendor, "ROLE", Comparison::Is, Some("OTHER"))?;
        if let Some(name) = self.find_subelement(vendor, "mets:name") {
            self.check_text(name, Comparison::Is, VENDOR_NAME);
        }

        // Preserving organization
        let preservation = agents[1];
        self.check_attr(preservation, "ROLE", Comparison::Is, Some("PRESERVATION"))?;
        self.check_attr(preservation, "TYPE", Comparison::Is, Some("ORGANIZATION"))?;
        if let Some(name) = self.find_subelement(preservation, "mets:name") {
            self.check_text(name, Comparison::Is, ORGANIZATION_NAME);
        }

        // Disseminating organization
        let disseminator = agents[2];
        self.check_attr(disseminator, "ROLE", Comparison::Is, Some("DISSEMINATOR"))?;
        self.check_attr(disseminator, "TYPE", Comparison::Is, Some("ORGANIZATION"))?;
        if let Some(name) = self.find_subelement(disseminator, "mets:name") {
            self.check_text(name, Comparison::Is, ORGANIZATION_NAME);
        }

        Ok(())
    }

    /// dmdSec: Dublin Core wrapper reconciled against the spreadsheet
    /// metadata. Without a spreadsheet row there is nothing to compare
    /// against, so the section gets a single warning.
    fn validate_descriptive_metadata(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(descriptive) = self.find_element(doc, "/mets:mets/mets:dmdSec") else {
            return Ok(());
        };

        let Some(metadata) = self.metadata else {
            self.log.warn(
                &self.path,
                &self.item_id,
                "item has no associated metadata in the metadata export spreadsheet to validate against mets xml"
                    .to_string(),
            );
            return Ok(());
        };

        let Some(md_wrap) = self.find_subelement(descriptive, "mets:mdWrap") else {
            return Ok(());
        };
        self.check_attr(md_wrap, "MDTYPE", Comparison::Is, Some("DC"))?;
        self.check_attr(md_wrap, "LABEL", Comparison::Is, Some("Dublin Core Metadata"))?;

        let Some(xml_data) = self.find_subelement(md_wrap, "mets:xmlData") else {
            return Ok(());
        };

        if let Some(item_title) = &metadata.item_title {
            if let Some(dc_title) = self.find_subelement(xml_data, "dc:title") {
                self.check_text(dc_title, Comparison::Is, item_title);
            }
        } else {
            self.log.warn(
                &self.path,
                &self.item_id,
                "item title not found in metadata export spreadsheet to validate against mets xml"
                    .to_string(),
            );
        }

        if let Some(collection_title) = &metadata.collection_title {
            if let Some(dc_relation) = self.find_subelement(xml_data, "dc:relation") {
                self.check_text(dc_relation, Comparison::Is, collection_title);
            }
        } else {
            self.log.warn(
                &self.path,
                &self.item_id,
                "collection title not found in metadata export spreadsheet to validate against mets xml"
                    .to_string(),
            );
        }

        // The identifier never depends on the spreadsheet
        let item_id = self.item_id.clone();
        if let Some(dc_identifier) = self.find_subelement(xml_data, "dc:identifier") {
            self.check_text(dc_identifier, Comparison::Is, &item_id);
        }

        if let Some(item_date) = &metadata.item_date {
            if let Some(dc_date) = self.find_subelement(xml_data, "dc:date") {
                self.check_dates(item_date, dc_date.text().unwrap_or_default());
            }
        } else {
            self.log.warn(
                &self.path,
                &self.item_id,
                "item date not found in metadata export spreadsheet to validate against mets xml"
                    .to_string(),
            );
        }

        // Located for their existence reporting only
        let _ = self.find_subelement(xml_data, "dc:format");
        let _ = self.find_subelements(xml_data, "dc:format.extent", None);

        Ok(())
    }

    /// amdSec: one techMD per preservation file, with inline-described
    /// audio objects reconciled against the audio files on disk.
    fn validate_administrative_metadata(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(administrative) = self.find_element(doc, "/mets:mets/mets:amdSec") else {
            return Ok(());
        };

        let audio_files = self.item.audio_files();
        let expected_count = audio_files.len() + self.item.files_in(FileCategory::Txt).len();

        if let Some(tech_mds) =
            self.find_subelements(administrative, "mets:techMD", Some(expected_count))
        {
            let mut found_files = Vec::new();
            for tech_md in tech_mds {
                // techMDs that describe by reference carry no audioObject
                if tech_md.find("mets:mdRef", NAMESPACES).is_some() {
                    continue;
                }
                if let Some(primary_identifier) = self.find_subelement(
                    tech_md,
                    "./mets:mdWrap/mets:xmlData/aes:audioObject/aes:primaryIdentifier",
                ) {
                    found_files.push(primary_identifier.text().unwrap_or_default().to_string());
                }
            }

            if !sorted_equal(&found_files, &audio_files) {
                self.log.error(
                    &self.path,
                    &self.item_id,
                    "audio filenames found in amdSec/techMDs do not match files found in directory"
                        .to_string(),
                );
            }
        }

        let _ = self.find_subelement(administrative, "mets:sourceMD");
        let _ = self.find_subelement(administrative, "mets:digiprovMD");

        Ok(())
    }

    /// fileSec: exactly two file groups with fixed IDs; the audio group
    /// carries three nested groups (preservation, production, access).
    fn validate_file_section(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(file_section) = self.find_element(doc, "/mets:mets/mets:fileSec") else {
            return Ok(());
        };

        let Some(file_groups) = self.find_subelements(file_section, "mets:fileGrp", Some(2))
        else {
            return Ok(());
        };

        let mut found_ids = Vec::new();
        for file_group in file_groups {
            let file_group_id = file_group.attr("ID").unwrap_or_default().to_string();
            if file_group_id == "audio-files" {
                let _ = self.find_subelements(file_group, "mets:fileGrp", Some(3));
            }
            found_ids.push(file_group_id);
        }

        let mut sorted_ids = found_ids.clone();
        sorted_ids.sort();
        if sorted_ids != EXPECTED_FILE_GROUP_IDS {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "mets xml fileGrp IDs {found_ids:?} do not match expected {EXPECTED_FILE_GROUP_IDS:?}"
                ),
            );
        }

        Ok(())
    }

    /// structMap: file pointers under the nested divs reconciled against
    /// the audio files on disk.
    fn validate_structural_map(&mut self, doc: &Document) -> Result<(), RuleConfigError> {
        let Some(structural_map) = self.find_element(doc, "/mets:mets/mets:structMap") else {
            return Ok(());
        };

        let Some(top_div) = self.find_subelement(structural_map, "mets:div") else {
            return Ok(());
        };
        let Some(sub_divs) = self.find_subelements(top_div, "mets:div", None) else {
            return Ok(());
        };

        let expected_files = self.item.audio_files();
        let mut file_pointers = Vec::new();
        for sub_div in sub_divs {
            for fptr in sub_div.find_all("mets:fptr", NAMESPACES) {
                let file_id = fptr.attr("FILEID").unwrap_or_default();
                let file_id = file_id.strip_prefix("mdp.").unwrap_or(file_id).trim();
                file_pointers.push(file_id.to_string());
            }
        }

        if !sorted_equal(&file_pointers, &expected_files) {
            self.log.error(
                &self.path,
                &self.item_id,
                format!(
                    "mets structMap fileptr IDs {file_pointers:?} do not match expected {expected_files:?}"
                ),
            );
        }

        Ok(())
    }
}

/// Order-insensitive sequence equality: sort both sides and compare
/// element-wise, so duplicate counts still matter.
fn sorted_equal(left: &[String], right: &[String]) -> bool {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort();
    right.sort();
    left == right
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;

    fn make_item(id: &str) -> Item {
        let mut files = BTreeMap::new();
        files.insert(FileCategory::Xml, vec![format!("{id}.xml")]);
        files.insert(FileCategory::Wav, vec!["side01.wav".to_string()]);
        files.insert(FileCategory::Mp3, vec!["side01.mp3".to_string()]);
        Item {
            id: id.to_string(),
            path: Path::new("/project").join(id),
            files,
        }
    }

    fn make_checks<'a>(log: &'a mut FindingLog, item: &'a Item) -> ItemChecks<'a> {
        ItemChecks {
            log,
            path: item.path.join(format!("{}.xml", item.id)),
            item_id: item.id.clone(),
            item,
            metadata: None,
        }
    }

    fn messages(log: &FindingLog) -> Vec<&str> {
        log.findings()
            .iter()
            .map(|finding| finding.message.as_str())
            .collect()
    }

    const NS: &str = "xmlns:mets=\"http://www.loc.gov/METS/\" xmlns:dc=\"http://purl.org/dc/elements/1.1\" xmlns:aes=\"http://www.aes.org/audioObject\"";

    #[test]
    fn find_element_requires_exactly_one_match() {
        let doc = Document::parse_str(&format!(
            "<mets:mets {NS}><mets:dmdSec/><mets:dmdSec/></mets:mets>"
        ))
        .unwrap();
        let item = make_item("0001");
        let mut log = FindingLog::new();
        let mut checks = make_checks(&mut log, &item);

        assert!(checks.find_element(&doc, "/mets:mets").is_some());
        assert!(checks.find_element(&doc, "/mets:mets/mets:fileSec").is_none());
        assert!(checks.find_element(&doc, "/mets:mets/mets:dmdSec").is_none());

        assert_eq!(
            messages(&log),
            vec![
                "mets xml has no element /mets:mets/mets:fileSec",
                "mets xml has multiple /mets:mets/mets:dmdSec elements",
            ]
        );
    }

    #[test]
    fn find_subelements_reports_cardinality() {
        let doc = Document::parse_str(&format!(
            "<mets:mets {NS}><mets:agent/><mets:agent/><mets:agent/></mets:mets>"
        ))
        .unwrap();
        let item = make_item("0001");
        let mut log = FindingLog::new();
        let root = doc.root();

        // Exact expectation met: no finding
        let mut checks = make_checks(&mut log, &item);
        assert!(checks.find_subelements(root, "mets:agent", Some(3)).is_some());
        // Count mismatch
        assert!(checks.find_subelements(root, "mets:agent", Some(2)).is_none());
        // Zero without expectation
        assert!(checks.find_subelements(root, "mets:div", None).is_none());

        assert_eq!(
            messages(&log),
            vec![
                "3 mets:agent subelements found in mets:mets, expected 2",
                "No mets:div subelements found in mets:mets",
            ]
        );
    }

    #[test]
    fn unsupported_comparison_is_a_config_fault() {
        let doc =
            Document::parse_str(&format!("<mets:mets {NS} TYPE=\"AUDIO RECORDING\"/>")).unwrap();
        let item = make_item("0001");
        let mut log = FindingLog::new();
        let mut checks = make_checks(&mut log, &item);
        let root = doc.root();

        let error = checks
            .check_attr(root, "TYPE", Comparison::Contains, Some("AUDIO"))
            .unwrap_err();
        assert!(matches!(
            error,
            RuleConfigError::UnsupportedComparison {
                comparison: Comparison::Contains,
                ..
            }
        ));
        // A configuration fault records no data finding
        assert!(log.is_empty());
    }

    #[test]
    fn attr_equality_requires_existence_first() {
        let doc = Document::parse_str(&format!("<mets:mets {NS}/>")).unwrap();
        let item = make_item("0001");
        let mut log = FindingLog::new();
        let mut checks = make_checks(&mut log, &item);

        checks
            .check_attr(doc.root(), "OBJID", Comparison::Is, Some("0001"))
            .unwrap();

        // Only the existence error; no equality error on a missing attribute
        assert_eq!(
            messages(&log),
            vec!["OBJID attribute does not exists in mets:mets"]
        );
    }

    #[test]
    fn check_dates_accepts_matching_formats() {
        let item = make_item("0001");

        let mut log = FindingLog::new();
        make_checks(&mut log, &item).check_dates("January 1, 2020", "2020-01-01");
        assert!(log.is_empty());

        let mut log = FindingLog::new();
        make_checks(&mut log, &item).check_dates("January 1, 2020", "2020-01-02");
        assert_eq!(
            messages(&log),
            vec!["January 1, 2020 date in metadata export does not equal 2020-01-02 date in mets"]
        );
    }

    #[test]
    fn check_dates_retries_without_trailing_artifact() {
        let item = make_item("0001");
        let mut log = FindingLog::new();
        make_checks(&mut log, &item).check_dates("January 1, 2020\u{FFFD}", "2020-01-01");
        assert!(log.is_empty());
    }

    #[test]
    fn undated_pair_produces_no_error() {
        // Both sides fall through to the parse comparison; neither parses,
        // so the pair never gets flagged
        let item = make_item("0001");
        let mut log = FindingLog::new();
        make_checks(&mut log, &item).check_dates("Undated", "undated");
        assert!(log.is_empty());
    }

    #[test]
    fn undated_metadata_against_real_date_is_flagged() {
        let item = make_item("0001");
        let mut log = FindingLog::new();
        make_checks(&mut log, &item).check_dates("Undated", "2020-01-01");
        assert_eq!(
            messages(&log),
            vec!["Undated date in metadata export does not equal 2020-01-01 date in mets"]
        );
    }

    #[test]
    fn sorted_equality_respects_duplicates() {
        let one = ["a.wav".to_string(), "b.wav".to_string()];
        let two = ["b.wav".to_string(), "a.wav".to_string()];
        let three = ["a.wav".to_string(), "a.wav".to_string(), "b.wav".to_string()];

        assert!(sorted_equal(&one, &two));
        assert!(!sorted_equal(&one, &three));
        assert!(!sorted_equal(&one, &one[..1]));
    }

    #[test]
    fn check_text_normalizes_both_sides() {
        let doc = Document::parse_str(&format!(
            "<mets:mets {NS}><dc:title>Arts &amp; Letters \u{2014} \"Reel  1\"</dc:title></mets:mets>"
        ))
        .unwrap();
        let item = make_item("0001");
        let mut log = FindingLog::new();
        let mut checks = make_checks(&mut log, &item);
        let title = doc.root().find("dc:title", NAMESPACES).unwrap();

        checks.check_text(title, Comparison::Is, "Arts and Letters \u{2014} Reel 1");
        checks.check_text(title, Comparison::Is, "Arts and Letters");
        assert_eq!(
            messages(&log),
            vec![
                "Arts and Letters \u{2014} Reel 1 text does not equal Arts and Letters value in dc:title"
            ]
        );
    }
}
