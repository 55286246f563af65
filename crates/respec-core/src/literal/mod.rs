//! Reader and writer for the generator's JavaScript configuration files.
//!
//! The generator takes its configuration as a JavaScript object literal,
//! usually bound to a global:
//!
//! ```javascript
//! var respecConfig = {
//!   specStatus: "CG-DRAFT",
//!   editors: [{ name: "Elad Alon", w3cid: 118124 }],
//!   xref: ["html", "dom"],
//! };
//! ```
//!
//! This module reads the data subset of that syntax (unquoted keys, single
//! quotes, comments, trailing commas, `undefined`) into a
//! [`serde_json::Value`]. Plain JSON is a subset and parses the same way.
//! Unlike `serde_json`, a key repeated in one object is an error rather
//! than a silent overwrite.
//!
//! ```
//! use respec_core::literal;
//!
//! let doc = literal::parse("const cfg = { xref: ['html'], };").unwrap();
//! assert_eq!(doc.binding.as_deref(), Some("cfg"));
//! assert_eq!(doc.value["xref"][0], "html");
//! ```

mod lexer;
mod parser;

use serde_json::Value;

use crate::error::Result;

/// Variable name used when writing a record without a known binding.
pub const DEFAULT_BINDING: &str = "respecConfig";

/// A parsed configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralDocument {
    /// Name the literal was assigned to, if the file used `var x = ...`
    pub binding: Option<String>,
    /// The literal itself
    pub value: Value,
}

/// Parses JavaScript or JSON source.
pub fn parse(source: &str) -> Result<LiteralDocument> {
    parser::Parser::new(source)?.document()
}

/// Parses JavaScript or JSON source, discarding any binding name.
pub fn parse_value(source: &str) -> Result<Value> {
    parse(source).map(|doc| doc.value)
}

/// Writes `value` as a `var NAME = ...;` statement.
///
/// JSON is valid JavaScript, so the body is pretty-printed JSON.
pub fn to_js_string(value: &Value, binding: &str) -> Result<String> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(format!("var {binding} = {body};\n"))
}
