//! Parameter descriptions scraped from constructor documentation.
//!
//! Best effort only: documentation that is not a single well-formed XML
//! element yields no descriptions at all, never an error.

use quick_xml::Reader;
use quick_xml::events::Event;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
enum DocError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("not a single well-formed element: {0}")]
    Structure(&'static str),
}

/// `<param name="...">` texts of one documentation comment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ParamDocs {
    descriptions: FxHashMap<String, String>,
}

impl ParamDocs {
    pub fn parse(xml: &str) -> Self {
        match scrape(xml) {
            Ok(descriptions) => Self { descriptions },
            Err(err) => {
                tracing::trace!("ignoring malformed constructor documentation: {err}");
                Self::default()
            }
        }
    }

    /// Description of the first `param` element named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }
}

struct Capture {
    name: String,
    depth: usize,
    text: String,
}

fn scrape(xml: &str) -> Result<FxHashMap<String, String>, DocError> {
    let mut reader = Reader::from_str(xml);
    let mut descriptions = FxHashMap::default();
    let mut capture: Option<Capture> = None;
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(DocError::Structure("multiple root elements"));
                    }
                }
                depth += 1;

                if capture.is_none() && e.name().as_ref() == b"param" {
                    if let Some(attr) = e.try_get_attribute("name")? {
                        capture = Some(Capture {
                            name: attr.unescape_value()?.into_owned(),
                            depth,
                            text: String::new(),
                        });
                    }
                }
            }
            Event::Empty(e) => {
                if depth == 0 {
                    roots += 1;
                    if roots > 1 {
                        return Err(DocError::Structure("multiple root elements"));
                    }
                }

                if capture.is_none() && e.name().as_ref() == b"param" {
                    if let Some(attr) = e.try_get_attribute("name")? {
                        descriptions
                            .entry(attr.unescape_value()?.into_owned())
                            .or_insert_with(String::new);
                    }
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(DocError::Structure("unmatched end tag"));
                }
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let Some(done) = capture.take() {
                        descriptions.entry(done.name).or_insert(done.text);
                    }
                }
                depth -= 1;
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                if depth == 0 {
                    if !text.trim().is_empty() {
                        return Err(DocError::Structure("text outside the root element"));
                    }
                } else if let Some(c) = capture.as_mut() {
                    c.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if depth == 0 {
                    return Err(DocError::Structure("CDATA outside the root element"));
                }
                if let Some(c) = capture.as_mut() {
                    c.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DocError::Structure("unclosed element"));
    }
    if roots != 1 {
        return Err(DocError::Structure("no root element"));
    }

    Ok(descriptions)
}
