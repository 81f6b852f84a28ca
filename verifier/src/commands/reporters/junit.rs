use std::fmt::Display;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::checks::{CheckOutcome, CheckStatus};
use crate::commands::reporters::{Reporter, Summary};
use crate::commands::APP_NAME;
use crate::reports::Result;

/// Writes the verification run as a JUnit report, one test case per check.
#[derive(Debug)]
pub struct JunitReporter<'report> {
    pub name: &'report str,
}

impl Reporter for JunitReporter<'_> {
    fn report(
        &self,
        writer: &mut crate::utils::writer::Writer,
        summary: &Summary<'_>,
    ) -> Result<()> {
        let mut writer = Writer::new_with_indent(writer, b' ', 4);
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);

        writer.write_event(Event::Decl(decl))?;
        EventType::TestSuites(TestSuites {
            name: self.name,
            summary,
        })
        .serialize(&mut writer)?;

        Ok(writer.write_indent()?)
    }
}

#[derive(Debug)]
struct TestSuites<'report> {
    name: &'report str,
    summary: &'report Summary<'report>,
}

#[derive(Debug)]
enum EventType<'report> {
    TestSuites(TestSuites<'report>),
    TestSuite(&'report Summary<'report>),
    TestCase(&'report CheckOutcome),
    Failure(String),
    Error(String),
    Skipped(String),
}

fn seconds(millis: u128) -> String {
    format!("{:.3}", millis as f64 / 1000.0)
}

impl<'report> EventType<'report> {
    fn start_tag(&self) -> BytesStart<'static> {
        BytesStart::new(self.to_string())
    }

    fn serialize_end_event(&self, writer: &mut Writer<impl std::io::Write>) -> Result<()> {
        Ok(writer.write_event(Event::End(BytesEnd::new(self.to_string())))?)
    }

    fn extend_attributes(&self, tag: &mut BytesStart<'_>) {
        match self {
            EventType::TestSuites(suites) => {
                tag.extend_attributes([
                    ("name", suites.name),
                    ("tests", suites.summary.outcomes.len().to_string().as_str()),
                    ("failures", suites.summary.failed.to_string().as_str()),
                    ("errors", suites.summary.errored.to_string().as_str()),
                    ("time", seconds(suites.summary.duration).as_str()),
                ]);
            }
            EventType::TestSuite(summary) => {
                tag.extend_attributes([
                    ("name", APP_NAME),
                    ("tests", summary.outcomes.len().to_string().as_str()),
                    ("errors", summary.errored.to_string().as_str()),
                    ("failures", summary.failed.to_string().as_str()),
                    ("skipped", summary.skipped.to_string().as_str()),
                    ("time", seconds(summary.duration).as_str()),
                ]);
            }
            EventType::TestCase(outcome) => {
                tag.extend_attributes([
                    ("classname", APP_NAME),
                    ("name", outcome.name),
                    ("time", seconds(outcome.duration).as_str()),
                    ("status", outcome.status.label()),
                ]);
            }
            EventType::Failure(message) | EventType::Error(message) => {
                tag.push_attribute(("message", message.as_str()));
            }
            EventType::Skipped(reason) => {
                tag.push_attribute(("message", reason.as_str()));
            }
        }
    }

    fn serialize(&self, writer: &mut Writer<impl std::io::Write>) -> Result<()> {
        let mut tag = self.start_tag();
        self.extend_attributes(&mut tag);
        match self {
            EventType::TestSuites(suites) => {
                writer.write_event(Event::Start(tag))?;
                EventType::TestSuite(suites.summary).serialize(writer)?;
                self.serialize_end_event(writer)?;
            }
            EventType::TestSuite(summary) => {
                writer.write_event(Event::Start(tag))?;
                for outcome in summary.outcomes {
                    EventType::TestCase(outcome).serialize(writer)?;
                }
                self.serialize_end_event(writer)?;
            }
            EventType::TestCase(outcome) => {
                let child = match &outcome.status {
                    CheckStatus::Pass => None,
                    CheckStatus::Fail(err) => Some(EventType::Failure(err.to_string())),
                    CheckStatus::Error(err) => Some(EventType::Error(err.to_string())),
                    CheckStatus::Skip(reason) => Some(EventType::Skipped(reason.clone())),
                };
                match child {
                    Some(child) => {
                        writer.write_event(Event::Start(tag))?;
                        child.serialize(writer)?;
                        self.serialize_end_event(writer)?;
                    }
                    None => writer.write_event(Event::Empty(tag))?,
                }
            }
            EventType::Failure(message) | EventType::Error(message) => {
                writer.write_event(Event::Start(tag))?;
                writer.write_event(Event::Text(BytesText::new(message)))?;
                self.serialize_end_event(writer)?;
            }
            EventType::Skipped(..) => writer.write_event(Event::Empty(tag))?,
        }

        Ok(())
    }
}

impl Display for EventType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EventType::TestSuites(..) => "testsuites",
            EventType::TestSuite(..) => "testsuite",
            EventType::TestCase(..) => "testcase",
            EventType::Failure(..) => "failure",
            EventType::Error(..) => "error",
            EventType::Skipped(..) => "skipped",
        };

        f.write_str(text)
    }
}
