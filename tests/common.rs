//! Shared fixtures for nel-audit integration tests
//!
//! The documents are KORE50 benchmark sentences with their gold markings.

#![allow(dead_code)]

use nel_audit::{CheckerConfig, Document, Marking};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DBPEDIA: &str = "http://dbpedia.org";
pub const AKSW: &str = "http://aksws.org";

pub const DISAMBIGUATES: &str = "http://dbpedia.org/ontology/wikiPageDisambiguates";

pub const HARDING_TEXT: &str = "Florence May Harding studied at a school in Sydney, and with Douglas Robert Dundas , but in effect had no formal training in either botany or art.";
pub const HARDING_LONG_TEXT: &str = "Florence May Harding studied at a school in Sydney that is in Australia, and with Douglas Robert Dundas , but in effect had no formal training in either botany or art.";
pub const CARVILLE_TEXT: &str = "Such notables include James Carville, who was the senior political adviser to Bill Clinton, and Donna Brazile, the campaign manager of the 2000 presidential campaign of Vice-President Al Gore.";
pub const SENATOR_TEXT: &str = "The senator received a Bachelor of Laws from the Columbia University.";

/// Route test logs through the test harness; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn harding_document() -> Document {
    Document::new(
        "http://www.mpi-inf.mpg.de/yago-naga/aida/download/KORE50.tar.gz/AIDA.tsv/CEL06",
        HARDING_TEXT,
        vec![
            Marking::new(0, 20, "http://dbpedia.org/resource/Florence_May_Harding"),
            Marking::new(34, 6, "http://dbpedia.org/resource/National_Art_School"),
            Marking::new(44, 6, "http://dbpedia.org/resource/Sydney"),
            Marking::new(61, 21, "http://dbpedia.org/resource/Douglas_Robert_Dundas"),
        ],
    )
}

/// Harding sentence where the Sydney marking swallowed a description
pub fn harding_long_description_document() -> Document {
    Document::new(
        "http://www.mpi-inf.mpg.de/yago-naga/aida/download/KORE50.tar.gz/AIDA.tsv/CEL06",
        HARDING_LONG_TEXT,
        vec![
            Marking::new(0, 20, "http://dbpedia.org/resource/Florence_May_Harding"),
            Marking::new(34, 6, "http://dbpedia.org/resource/National_Art_School"),
            Marking::new(44, 27, "http://dbpedia.org/resource/Sydney"),
            Marking::new(61, 21, "http://dbpedia.org/resource/Douglas_Robert_Dundas"),
        ],
    )
}

pub fn carville_document() -> Document {
    Document::new(
        "http://www.mpi-inf.mpg.de/yago-naga/aida/download/KORE50.tar.gz/AIDA.tsv/MUS03",
        CARVILLE_TEXT,
        vec![
            Marking::new(22, 36, "http://dbpedia.org/resource/James_Carville"),
            Marking::new(78, 12, "http://dbpedia.org/resource/Bill_Clinton"),
            Marking::new(78, 13, "http://dbpedia.org/resource/Bill_Clinton"),
            Marking::new(115, 16, "http://dbpedia.org/resource/Campaign_manager"),
            Marking::new(184, 7, "http://dbpedia.org/resource/Al_Gore"),
        ],
    )
}

pub fn senator_document() -> Document {
    Document::new(
        "http://www.mpi-inf.mpg.de/yago-naga/aida/download/KORE50.tar.gz/AIDA.tsv/POL01",
        SENATOR_TEXT,
        vec![
            Marking::new(4, 7, "http://aksws.org/notInWiki/Senator_1"),
            Marking::new(49, 19, "http://dbpedia.org/resource/Columbia_University"),
        ],
    )
}

/// Point every marking URI at the mock server instead of the public knowledge bases
pub fn rebase(mut documents: Vec<Document>, server: &MockServer) -> Vec<Document> {
    let base = server.uri();
    for marking in documents.iter_mut().flat_map(|d| d.markings.iter_mut()) {
        for origin in [DBPEDIA, AKSW] {
            if let Some(rest) = marking.uri.strip_prefix(origin) {
                marking.uri = format!("{}{}", base, rest);
            }
        }
    }
    documents
}

/// Checker settings suitable for a local mock server
pub fn test_config() -> CheckerConfig {
    CheckerConfig::builder()
        .timeout(5)
        .user_agent("nel-audit-tests")
        .build()
        .expect("test configuration is valid")
}

pub fn rdf_xml_label(subject: &str, label: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#">
  <rdf:Description rdf:about="{}">
    <rdfs:label xml:lang="en">{}</rdfs:label>
  </rdf:Description>
</rdf:RDF>
"#,
        subject, label
    )
}

pub fn rdf_xml_disambiguation(subject: &str, targets: &[&str]) -> String {
    let links: String = targets
        .iter()
        .map(|target| format!("    <dbo:wikiPageDisambiguates rdf:resource=\"{}\"/>\n", target))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:dbo="http://dbpedia.org/ontology/">
  <rdf:Description rdf:about="{}">
{}  </rdf:Description>
</rdf:RDF>
"#,
        subject, links
    )
}

/// Serve `resource_path` as an RDF/XML entity description
pub async fn mount_entity(server: &MockServer, resource_path: &str, label: &str) {
    let subject = format!("{}{}", server.uri(), resource_path);
    Mock::given(method("GET"))
        .and(path(resource_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(rdf_xml_label(&subject, label), "application/rdf+xml"),
        )
        .mount(server)
        .await;
}

/// Serve `resource_path` as a disambiguation page linking to `targets`
pub async fn mount_disambiguation(server: &MockServer, resource_path: &str, targets: &[&str]) {
    let subject = format!("{}{}", server.uri(), resource_path);
    Mock::given(method("GET"))
        .and(path(resource_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(rdf_xml_disambiguation(&subject, targets), "application/rdf+xml"),
        )
        .mount(server)
        .await;
}
