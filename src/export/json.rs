// JSON document writer

use super::TopologyDocument;
use crate::error::AppResult;
use std::io::Write;
use std::path::Path;

/// Serialize the document to the given file, or to stdout when no path is
/// configured.
pub fn write_document(
    document: &TopologyDocument,
    path: Option<&Path>,
    pretty: bool,
) -> AppResult<()> {
    let json = render(document, pretty)?;

    match path {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!("Topology document written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn render(document: &TopologyDocument, pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
