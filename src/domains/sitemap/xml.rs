//! sitemaps.org 0.9 serialization.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::entry::SitemapEntry;
use super::error::SitemapError;

/// Namespace of the sitemap protocol.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

type XmlWriter = Writer<Vec<u8>>;

/// Render a `<urlset>` document.
pub fn render_urlset(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_declaration(&mut writer)?;
    open_root(&mut writer, "urlset")?;

    for entry in entries {
        open(&mut writer, "url")?;
        text_element(&mut writer, "loc", &entry.url)?;
        text_element(&mut writer, "lastmod", &format_lastmod(entry.last_modified))?;
        text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        text_element(&mut writer, "priority", &format_priority(entry.priority))?;
        close(&mut writer, "url")?;
    }

    close(&mut writer, "urlset")?;
    finish(writer)
}

/// Render a `<sitemapindex>` pointing at each of `locations`.
pub fn render_index(
    locations: &[String],
    last_modified: DateTime<Utc>,
) -> Result<String, SitemapError> {
    let lastmod = format_lastmod(last_modified);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_declaration(&mut writer)?;
    open_root(&mut writer, "sitemapindex")?;

    for loc in locations {
        open(&mut writer, "sitemap")?;
        text_element(&mut writer, "loc", loc)?;
        text_element(&mut writer, "lastmod", &lastmod)?;
        close(&mut writer, "sitemap")?;
    }

    close(&mut writer, "sitemapindex")?;
    finish(writer)
}

/// W3C datetime, second precision, UTC.
pub fn format_lastmod(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One or two decimals: `1.0`, `0.8`, `0.95`.
pub fn format_priority(priority: f64) -> String {
    let mut text = format!("{priority:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    text
}

fn write_declaration(writer: &mut XmlWriter) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)
}

fn open_root(writer: &mut XmlWriter, name: &str) -> Result<(), SitemapError> {
    let start = BytesStart::new(name).with_attributes([("xmlns", SITEMAP_NS)]);
    writer.write_event(Event::Start(start)).map_err(xml_error)
}

fn open(writer: &mut XmlWriter, name: &str) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)
}

fn close(writer: &mut XmlWriter, name: &str) -> Result<(), SitemapError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<(), SitemapError> {
    open(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    close(writer, name)
}

fn finish(writer: XmlWriter) -> Result<String, SitemapError> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(xml_error)
}

fn xml_error(e: impl std::fmt::Display) -> SitemapError {
    SitemapError::xml(e.to_string())
}
