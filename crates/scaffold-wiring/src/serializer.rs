//! Rendering and atomic replacement
//!
//! Splices computed against one source are applied back-to-front so earlier
//! offsets stay valid. The result must parse again before it is written, and
//! the file is replaced through a temporary sibling so readers never observe
//! a partial write.

use crate::delta::Splice;
use crate::error::SerializeError;
use scaffold_source::{ContentHash, GoSource};
use std::io::Write;
use std::path::Path;

/// Apply `splices` to `source` and re-parse the result
///
/// # Errors
/// - `SerializeError::OverlappingSplices` if two splices touch the same bytes
/// - `SerializeError::InvalidOutput` if the result is not valid Go
pub fn render(source: &GoSource, splices: &[&Splice]) -> Result<GoSource, SerializeError> {
    let mut ordered: Vec<&Splice> = splices.to_vec();
    ordered.sort_by_key(|s| (s.range.start, s.range.end));

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].overlaps(pair[1])) {
        return Err(SerializeError::OverlappingSplices(pair[1].range.start));
    }

    let mut text = source.text().to_string();
    for splice in ordered.iter().rev() {
        text.replace_range(splice.range.clone(), &splice.text);
    }

    GoSource::parse(text).map_err(SerializeError::InvalidOutput)
}

/// Replace the file at `path` with `contents`
///
/// The file must still hash to `expected`, the hash of the text the
/// contents were computed from.
///
/// # Errors
/// - `SerializeError::ConcurrentModification` if the file changed since load
/// - `SerializeError::Io` on read, write or rename failure
pub fn write_atomic(path: &Path, contents: &str, expected: ContentHash) -> Result<(), SerializeError> {
    let current = std::fs::read(path).map_err(|e| SerializeError::io_error(path, e))?;
    let actual = ContentHash::compute(&current);
    if actual != expected {
        return Err(SerializeError::ConcurrentModification {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)
        .map_err(|e| SerializeError::io_error(path, e))?
        .permissions();

    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| SerializeError::io_error(dir, e))?;
    temp.write_all(contents.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .and_then(|()| temp.as_file().set_permissions(permissions))
        .map_err(|e| SerializeError::io_error(temp.path(), e))?;

    temp.persist(path)
        .map_err(|e| SerializeError::io_error(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "replaced file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "package c\n\ntype A struct {\n\tX int\n}\n";

    #[test]
    fn applies_splices_in_any_order() {
        let doc = GoSource::parse(SOURCE).unwrap();
        let field = Splice::insert(SOURCE.find("\tX int").unwrap() + 6, "\n\tY int");
        let import = Splice::insert(9, "\n\nimport \"fmt\"");

        let out = render(&doc, &[&field, &import]).unwrap();
        assert_eq!(
            out.text(),
            "package c\n\nimport \"fmt\"\n\ntype A struct {\n\tX int\n\tY int\n}\n"
        );
        let reversed = render(&doc, &[&import, &field]).unwrap();
        assert_eq!(reversed.text(), out.text());
    }

    #[test]
    fn rejects_overlapping_splices() {
        let doc = GoSource::parse(SOURCE).unwrap();
        let a = Splice::replace(12..20, "x");
        let b = Splice::insert(15, "y");
        assert!(matches!(
            render(&doc, &[&a, &b]),
            Err(SerializeError::OverlappingSplices(15))
        ));
    }

    #[test]
    fn rejects_invalid_output() {
        let doc = GoSource::parse(SOURCE).unwrap();
        let broken = Splice::insert(SOURCE.len() - 2, "\n\tY int int {");
        assert!(matches!(
            render(&doc, &[&broken]),
            Err(SerializeError::InvalidOutput(_))
        ));
    }

    #[test]
    fn writes_when_unchanged_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("container.go");
        std::fs::write(&path, SOURCE).unwrap();

        write_atomic(&path, "package c\n", ContentHash::compute(SOURCE.as_bytes())).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package c\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn detects_concurrent_modification() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("container.go");
        std::fs::write(&path, "package changed\n").unwrap();

        let err = write_atomic(&path, "package c\n", ContentHash::compute(SOURCE.as_bytes()))
            .unwrap_err();
        assert!(matches!(err, SerializeError::ConcurrentModification { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package changed\n");
    }
}
