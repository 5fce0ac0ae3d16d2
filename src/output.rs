// src/output.rs
// =============================================================================
// Turns the resolved icon list into what we print on stdout.
//
// - Text:       one name per line
// - Json:       a pretty-printed JSON array
// - TypeScript: a module with a const array, a union type and a default export
//
// All renderers return the finished String; main.rs prints it in one go so a
// failure never leaves half an output behind.
// =============================================================================

use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    TypeScript,
}

pub fn render(icons: &[String], format: OutputFormat, generated_on: NaiveDate) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(icons)),
        OutputFormat::Json => render_json(icons),
        OutputFormat::TypeScript => Ok(render_typescript(icons, generated_on)),
    }
}

fn render_text(icons: &[String]) -> String {
    let mut out = String::new();
    for icon in icons {
        out.push_str(icon);
        out.push('\n');
    }
    out
}

fn render_json(icons: &[String]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(icons)?;
    out.push('\n');
    Ok(out)
}

fn render_typescript(icons: &[String], generated_on: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str("/**\n");
    out.push_str(" * Material Design Icons\n");
    out.push_str(&format!(" * Generated on {}\n", generated_on.format("%Y-%m-%d")));
    out.push_str(&format!(" * Total icons: {}\n", icons.len()));
    out.push_str(" *\n");
    out.push_str(" * Usage:\n");
    out.push_str(" *   import icons, { MaterialIcon } from \"./material-icons\";\n");
    out.push_str(" *   const icon: MaterialIcon = \"home\";\n");
    out.push_str(" */\n\n");

    out.push_str("export const icons = [\n");
    for icon in icons {
        // serde_json gives us a correctly escaped, double-quoted string literal
        let literal = serde_json::Value::String(icon.clone()).to_string();
        out.push_str(&format!("  {},\n", literal));
    }
    out.push_str("] as const;\n\n");

    out.push_str("export type MaterialIcon = typeof icons[number];\n\n");
    out.push_str("export default icons;\n");
    out
}
