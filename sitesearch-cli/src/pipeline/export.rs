use std::io::Write;

use searchcloud::domain::SearchDocument;

/// Write documents as newline-delimited JSON for the index ingestion tool.
pub fn export_documents<W: Write>(
    documents: &[SearchDocument],
    writer: &mut W,
) -> serde_json::Result<()> {
    for document in documents {
        serde_json::to_writer(&mut *writer, document)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    }
    Ok(())
}
