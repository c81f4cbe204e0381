//! RDF syntaxes the fetcher negotiates and the parsed model it returns.

pub mod model;

pub use model::ResolvedModel;

use std::fmt;

/// RDF serializations understood by the fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfSyntax {
    RdfXml,
    Turtle,
    NTriples,
}

const MEDIA_TYPES: &[(&str, RdfSyntax)] = &[
    ("application/rdf+xml", RdfSyntax::RdfXml),
    ("application/xml", RdfSyntax::RdfXml),
    ("text/xml", RdfSyntax::RdfXml),
    ("text/turtle", RdfSyntax::Turtle),
    ("application/x-turtle", RdfSyntax::Turtle),
    ("application/n-triples", RdfSyntax::NTriples),
    ("text/plain", RdfSyntax::NTriples),
];

impl RdfSyntax {
    /// Map a `Content-Type` header value to a syntax, ignoring parameters and case
    pub fn from_content_type(value: &str) -> Option<Self> {
        let essence = value.split(';').next()?.trim().to_ascii_lowercase();
        MEDIA_TYPES
            .iter()
            .find(|(media_type, _)| *media_type == essence)
            .map(|(_, syntax)| *syntax)
    }

    /// Canonical media type for this syntax
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
        }
    }

    /// Every media type accepted in `Content-Type` headers
    pub fn supported_media_types() -> Vec<&'static str> {
        MEDIA_TYPES.iter().map(|(media_type, _)| *media_type).collect()
    }
}

impl fmt::Display for RdfSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "Turtle",
            Self::NTriples => "N-Triples",
        };
        f.write_str(name)
    }
}
