use std::path::Path;

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::reports::errors::Error;
use crate::reports::files::read_path_content;
use crate::reports::Result;

pub type Attributes = IndexMap<String, String>;

pub const TESTCASE: &str = "testcase";
pub const SKIPPED: &str = "skipped";
pub const FAILURE: &str = "failure";

const NAME: &str = "name";
const MESSAGE: &str = "message";
const TYPE: &str = "type";

/// A `<failure>` child of a test case, with every attribute it was written with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    attributes: Attributes,
}

impl Failure {
    pub fn message(&self) -> Option<&str> {
        self.attributes.get(MESSAGE).map(String::as_str)
    }

    pub fn kind(&self) -> Option<&str> {
        self.attributes.get(TYPE).map(String::as_str)
    }
}

/// Direct child element of a `<testcase>`, keyed by its tag inside the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseChild {
    Failure(Failure),
    Other(Attributes),
}

impl CaseChild {
    fn from_element(element: &Element) -> Self {
        let attributes = element.attributes.clone();
        if element.tag == FAILURE {
            return CaseChild::Failure(Failure { attributes });
        }

        CaseChild::Other(attributes)
    }

    /// The child's attributes in document order.
    pub fn attributes(&self) -> &Attributes {
        match self {
            CaseChild::Failure(failure) => &failure.attributes,
            CaseChild::Other(attributes) => attributes,
        }
    }
}

/// One non-skipped `<testcase>`: its attributes plus one entry per direct child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCaseRecord {
    attributes: Attributes,
    children: IndexMap<String, CaseChild>,
}

impl TestCaseRecord {
    pub fn name(&self) -> Option<&str> {
        self.attribute(NAME)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn child(&self, tag: &str) -> Option<&CaseChild> {
        self.children.get(tag)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self.children.get(FAILURE) {
            Some(CaseChild::Failure(failure)) => Some(failure),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.children.contains_key(FAILURE)
    }
}

impl Serialize for TestCaseRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // child entries replace attributes of the same name
        let attributes = self
            .attributes
            .iter()
            .filter(|(key, _)| !self.children.contains_key(key.as_str()))
            .collect::<Vec<_>>();

        let mut map = serializer.serialize_map(Some(attributes.len() + self.children.len()))?;
        for (key, value) in attributes {
            map.serialize_entry(key, value)?;
        }
        for (tag, child) in &self.children {
            map.serialize_entry(tag, child.attributes())?;
        }
        map.end()
    }
}

/// Records read from a document, with the number of `<testcase>` elements left out as skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JunitCases {
    pub records: Vec<TestCaseRecord>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<usize>,
}

impl Element {
    fn from_start(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Self> {
        let decoder = reader.decoder();
        let tag = decoder.decode(start.name().as_ref())?.into_owned();
        let mut attributes = Attributes::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = decoder.decode(attribute.key.as_ref())?.into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.insert(key, value);
        }

        Ok(Element {
            tag,
            attributes,
            children: vec![],
        })
    }
}

/// Elements in document order, children referenced by index, so nesting depth
/// never turns into recursion depth.
#[derive(Debug)]
struct Document {
    elements: Vec<Element>,
    root: usize,
}

impl Document {
    fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut elements: Vec<Element> = vec![];
        let mut open: Vec<usize> = vec![];
        let mut root = None;
        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = Element::from_start(&reader, &start)?;
                    let index = attach(&mut elements, &open, &mut root, element)?;
                    open.push(index);
                }
                Event::Empty(start) => {
                    let element = Element::from_start(&reader, &start)?;
                    attach(&mut elements, &open, &mut root, element)?;
                }
                Event::End(end) => {
                    open.pop().ok_or_else(|| {
                        Error::MalformedDocument(format!(
                            "closing tag </{}> without an opening tag",
                            String::from_utf8_lossy(end.name().as_ref())
                        ))
                    })?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(&unclosed) = open.last() {
            return Err(Error::MalformedDocument(format!(
                "element <{}> is never closed",
                elements[unclosed].tag
            )));
        }

        let root = root
            .ok_or_else(|| Error::MalformedDocument(String::from("document has no root element")))?;
        Ok(Document { elements, root })
    }

    fn children(&self, index: usize) -> impl Iterator<Item = &Element> {
        self.elements[index]
            .children
            .iter()
            .map(move |&child| &self.elements[child])
    }

    fn is_skipped_case(&self, index: usize) -> bool {
        self.children(index).any(|child| child.tag == SKIPPED)
    }

    fn record(&self, index: usize) -> TestCaseRecord {
        let children = self
            .children(index)
            .fold(IndexMap::new(), |mut children: IndexMap<String, CaseChild>, child| {
                children.insert(child.tag.clone(), CaseChild::from_element(child));
                children
            });

        TestCaseRecord {
            attributes: self.elements[index].attributes.clone(),
            children,
        }
    }

    // descendant-or-self, document order
    fn collect_cases(&self) -> JunitCases {
        let mut cases = JunitCases::default();
        let mut pending = vec![self.root];
        while let Some(index) = pending.pop() {
            let element = &self.elements[index];
            if element.tag == TESTCASE {
                if self.is_skipped_case(index) {
                    cases.skipped += 1;
                } else {
                    cases.records.push(self.record(index));
                }
            }
            pending.extend(element.children.iter().rev());
        }
        cases
    }
}

fn attach(
    elements: &mut Vec<Element>,
    open: &[usize],
    root: &mut Option<usize>,
    element: Element,
) -> Result<usize> {
    let index = elements.len();
    match open.last() {
        Some(&parent) => elements[parent].children.push(index),
        None if root.is_some() => {
            return Err(Error::MalformedDocument(format!(
                "second root element <{}> after the document root",
                element.tag
            )))
        }
        None => *root = Some(index),
    }
    elements.push(element);
    Ok(index)
}

pub fn read_test_cases(content: &str) -> Result<JunitCases> {
    let cases = Document::parse(content)?.collect_cases();

    log::debug!(
        "read {} test cases, {} skipped",
        cases.records.len(),
        cases.skipped
    );
    Ok(cases)
}

pub fn get_test_cases_from_str(content: &str) -> Result<Vec<TestCaseRecord>> {
    Ok(read_test_cases(content)?.records)
}

pub fn get_test_cases_from_xml_file<P: AsRef<Path>>(path: P) -> Result<Vec<TestCaseRecord>> {
    let content = read_path_content(path.as_ref())?;
    log::trace!("parsing JUnit report {}", path.as_ref().display());
    get_test_cases_from_str(&content)
}
