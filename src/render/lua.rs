//! Lua lookup table output.
//!
//! Serializes a lookup table as a Lua chunk returning a table literal:
//! `return{["name"]={x=1,y=1},...}`. Entries are emitted in name order so
//! the file is byte-stable for identical inputs.

use std::fmt::Write;

use super::sheet::LookupTable;

/// Render the lookup table as a Lua chunk.
pub fn lua_table(table: &LookupTable) -> String {
    let mut out = String::with_capacity(16 + table.len() * 32);
    out.push_str("return{");

    for (i, (name, coord)) in table.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str("[\"");
        push_escaped(&mut out, name);
        // Writing to a String cannot fail
        let _ = write!(out, "\"]={{x={},y={}}}", coord.x, coord.y);
    }

    out.push('}');
    out
}

/// Append `s` with Lua short-string escapes applied.
fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03}", c as u32);
            }
            c => out.push(c),
        }
    }
}
