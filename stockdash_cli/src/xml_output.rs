use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use stockdash_lib::comparison::ComparisonTable;
use stockdash_lib::quote::QuoteView;
use stockdash_lib::sectors::SectorSummary;
use stockdash_lib::series::Series;
use stockdash_lib::types::Company;
use stockdash_lib::volume::VolumeProfile;
use stockdash_lib::MarketView;

/// Singularize array field names for XML child elements.
fn singular(field: &str) -> &str {
    match field {
        "points" => "point",
        "bars" => "bar",
        "metrics" => "metric",
        "top_gainers" | "top_losers" => "mover",
        "symbols" => "symbol",
        "rows" => "row",
        "values" => "value",
        "stocks" => "stock",
        _ => field,
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            writer.write_event(Event::Text(BytesText::new(if *b { "true" } else { "false" })))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Number(n) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let s = n.to_string();
            writer.write_event(Event::Text(BytesText::new(&s)))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::String(s) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            writer.write_event(Event::Text(BytesText::new(s)))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn new_document() -> Result<Writer<Cursor<Vec<u8>>>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn finish(writer: Writer<Cursor<Vec<u8>>>) -> Result<String> {
    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

/// Serialize a slice of Serialize items into an XML string.
fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = new_document()?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    finish(writer)
}

/// Serialize a single view model under `root_tag`.
fn object_to_xml<T: Serialize>(root_tag: &str, item: &T) -> Result<String> {
    let mut writer = new_document()?;
    let val = serde_json::to_value(item)?;
    write_value(&mut writer, root_tag, &val)?;
    finish(writer)
}

pub fn series_to_xml(series: &Series) -> Result<String> {
    object_to_xml("series", series)
}

pub fn volume_to_xml(profile: &VolumeProfile) -> Result<String> {
    object_to_xml("volume", profile)
}

pub fn quote_to_xml(view: &QuoteView) -> Result<String> {
    object_to_xml("quote", view)
}

pub fn market_to_xml(view: &MarketView) -> Result<String> {
    object_to_xml("market", view)
}

pub fn comparison_to_xml(table: &ComparisonTable) -> Result<String> {
    object_to_xml("comparison", table)
}

pub fn sectors_to_xml(sectors: &[SectorSummary]) -> Result<String> {
    items_to_xml("sectors", "sector", sectors)
}

pub fn companies_to_xml(companies: &[Company]) -> Result<String> {
    items_to_xml("companies", "company", companies)
}
