//! Registration message parser

use crate::error::{Error, Result};
use crate::extracted::{RegistrationFields, styled_cell_count};
use crate::types::Record;
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt::Display;
use std::path::Path;
use tracing::debug;

/// Output format of the sent date
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Read and parse one message file
pub fn parse_file(path: &Path) -> Result<Record> {
    let raw = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_registration(&raw)
}

/// Parse raw message bytes into a registration record.
///
/// Fails with [`Error::MissingFields`] when the name, phone or email
/// could not be found in the body.
pub fn parse_registration(raw: &[u8]) -> Result<Record> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| Error::Structure(e.to_string()))?;

    let date = extract_date(&parsed.headers);
    let sender = extract_sender(&parsed.headers);
    let body = render_body(&parsed)?;

    let fields = RegistrationFields::extract(&body);
    debug!(
        "Found {} styled cells in message from {}",
        styled_cell_count(&body),
        sender.as_deref().unwrap_or("(unknown sender)")
    );

    if !fields.is_complete() {
        return Err(Error::MissingFields(fields.missing()));
    }

    Ok(Record {
        date,
        name: fields.name,
        phone_number: fields.phone_number,
        email: fields.email,
    })
}

fn header_value(headers: &[mailparse::MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(mailparse::MailHeader::get_value)
}

/// Sent date in the local time zone, or empty when absent or unparsable
fn extract_date(headers: &[mailparse::MailHeader]) -> String {
    extract_date_in(headers, &Local)
}

fn extract_date_in<Tz>(headers: &[mailparse::MailHeader], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(value) = header_value(headers, "date") else {
        return String::new();
    };

    match DateTime::parse_from_rfc2822(value.trim()) {
        Ok(dt) => format_sent_date(&dt, tz),
        Err(e) => {
            debug!("Ignoring unparsable Date header {value:?}: {e}");
            String::new()
        }
    }
}

fn format_sent_date<Tz>(dt: &DateTime<FixedOffset>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format(DATE_FORMAT).to_string()
}

fn extract_sender(headers: &[mailparse::MailHeader]) -> Option<String> {
    header_value(headers, "from").filter(|from| !from.trim().is_empty())
}

/// Decoded body text the patterns run against.
///
/// Multipart messages prefer the first HTML part and fall back to the first
/// plain text part.
fn render_body(parsed: &mailparse::ParsedMail) -> Result<String> {
    if parsed.subparts.is_empty() {
        return parsed.get_body().map_err(|e| Error::Decode(e.to_string()));
    }

    let mut text: Option<String> = None;
    let mut html: Option<String> = None;
    collect_parts(parsed, &mut text, &mut html)?;

    Ok(html.or(text).unwrap_or_default())
}

fn collect_parts(
    parsed: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) -> Result<()> {
    for part in &parsed.subparts {
        if !part.subparts.is_empty() {
            collect_parts(part, text, html)?;
            continue;
        }

        let content_type = part.ctype.mimetype.to_lowercase();
        let wanted = (content_type == "text/html" && html.is_none())
            || (content_type == "text/plain" && text.is_none());
        if !wanted {
            continue;
        }

        let body = part.get_body().map_err(|e| Error::Decode(e.to_string()))?;
        if content_type == "text/html" {
            *html = Some(body);
        } else {
            *text = Some(body);
        }
    }

    Ok(())
}
