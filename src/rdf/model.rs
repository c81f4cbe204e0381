use crate::error::FetchFailure;
use crate::rdf::RdfSyntax;
use sophia_api::graph::Graph;
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::matcher::Any;
use sophia_api::term::IriRef;
use sophia_inmem::graph::LightGraph;
use sophia_iri::Iri;
use sophia_turtle::parser::{nt, turtle::TurtleParser};
use sophia_xml::parser::RdfXmlParser;
use std::fmt;

/// Triples parsed from a knowledge-base response
pub struct ResolvedModel {
    graph: LightGraph,
    triple_count: usize,
}

impl ResolvedModel {
    /// Parse `body` as `syntax`. Relative IRIs resolve against `base` when it is a valid IRI.
    pub fn parse(body: &str, syntax: RdfSyntax, base: Option<&str>) -> Result<Self, FetchFailure> {
        let base = base.and_then(|iri| Iri::new(iri.to_string()).ok());

        let graph: LightGraph = match syntax {
            RdfSyntax::Turtle => TurtleParser { base }
                .parse_str(body)
                .collect_triples()
                .map_err(|e| FetchFailure::ParseError(e.to_string()))?,
            RdfSyntax::NTriples => nt::parse_str(body)
                .collect_triples()
                .map_err(|e| FetchFailure::ParseError(e.to_string()))?,
            RdfSyntax::RdfXml => RdfXmlParser { base }
                .parse_str(body)
                .collect_triples()
                .map_err(|e| FetchFailure::ParseError(e.to_string()))?,
        };

        let triple_count = graph.triples().count();
        Ok(Self {
            graph,
            triple_count,
        })
    }

    pub fn triple_count(&self) -> usize {
        self.triple_count
    }

    pub fn is_empty(&self) -> bool {
        self.triple_count == 0
    }

    /// Whether some triple has `subject` as subject
    pub fn describes(&self, subject: &str) -> bool {
        let Ok(subject) = IriRef::new(subject) else {
            return false;
        };
        self.graph
            .triples_matching([subject], Any, Any)
            .next()
            .is_some()
    }

    /// Whether the model contains `<subject> <predicate> ?o` for any object.
    /// Arguments that are not valid IRIs never match.
    pub fn has_property(&self, subject: &str, predicate: &str) -> bool {
        let (Ok(subject), Ok(predicate)) = (IriRef::new(subject), IriRef::new(predicate)) else {
            return false;
        };
        self.graph
            .triples_matching([subject], [predicate], Any)
            .next()
            .is_some()
    }
}

impl fmt::Debug for ResolvedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedModel")
            .field("triple_count", &self.triple_count)
            .finish()
    }
}
