//! Idempotent anchor mutations
//!
//! Every mutation follows the same pattern: compute the identity key of the
//! requested entry, scan the anchor for it, and either report it as present
//! or append a new entry after the last one. Appends are expressed as
//! [`Splice`]s over the unmodified source, so mutating one anchor never
//! invalidates another.

use crate::delta::{MutationOutcome, Splice, WiringDelta};
use crate::layout::align;
use scaffold_source::{
    AnchorKind, Entry, EntryKind, EntryList, GoExpr, GoSource, ImportAnchor, ImportDecl,
    LiteralAnchor, Located, MethodAnchor, StructAnchor,
};

/// Planned mutation of one anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// Target anchor
    pub anchor: AnchorKind,
    /// What happened
    pub outcome: MutationOutcome,
    /// Edit to apply, present only for `Inserted`
    pub delta: Option<WiringDelta>,
}

impl Mutation {
    fn inserted(anchor: AnchorKind, key: &str, splice: Splice) -> Self {
        Self {
            anchor,
            outcome: MutationOutcome::Inserted,
            delta: Some(WiringDelta {
                anchor,
                key: key.to_string(),
                splice,
            }),
        }
    }

    fn unchanged(anchor: AnchorKind, outcome: MutationOutcome) -> Self {
        Self {
            anchor,
            outcome,
            delta: None,
        }
    }

    fn unresolved<T>(anchor: AnchorKind, located: &Located<T>) -> Self {
        let outcome = match located {
            Located::Mismatch(reason) => MutationOutcome::ShapeMismatch(reason.clone()),
            _ => MutationOutcome::AnchorNotFound,
        };
        Self::unchanged(anchor, outcome)
    }
}

/// Builds appends against one parsed source
#[derive(Debug, Clone, Copy)]
pub struct Mutator<'a> {
    doc: &'a GoSource,
    align: bool,
}

/// One physical line of a list: its entries and, when it can take part in
/// column alignment, its cells
struct Line {
    first_row: usize,
    last_row: usize,
    start: usize,
    end: usize,
    cells: Option<Vec<String>>,
}

impl<'a> Mutator<'a> {
    /// Create mutator over a document
    #[inline]
    #[must_use]
    pub fn new(doc: &'a GoSource, align: bool) -> Self {
        Self { doc, align }
    }

    /// Add import `path` unless any import declaration already has it
    #[must_use]
    pub fn add_import(&self, anchor: &ImportAnchor, path: &str) -> Mutation {
        if anchor.paths.iter().any(|p| p == path) {
            return Mutation::unchanged(AnchorKind::Import, MutationOutcome::AlreadyPresent);
        }

        let nl = self.doc.line_ending();
        let spec = format!("\"{path}\"");
        let splice = match &anchor.first {
            ImportDecl::Grouped(list) => self.append(list, vec![spec], false),
            ImportDecl::Single { spec: existing } => {
                let existing_text = self.doc.text().get(existing.clone()).unwrap_or_default();
                Splice::replace(
                    existing.clone(),
                    format!("({nl}\t{existing_text}{nl}\t{spec}{nl})"),
                )
            }
            ImportDecl::None { after } => Splice::insert(
                self.doc.line_end(*after),
                format!("{nl}{nl}import ({nl}\t{spec}{nl})"),
            ),
        };
        Mutation::inserted(AnchorKind::Import, path, splice)
    }

    /// Add field `name ty` unless a field called `name` exists
    #[must_use]
    pub fn add_field(&self, anchor: &Located<StructAnchor>, name: &str, ty: &GoExpr) -> Mutation {
        let Located::Found(anchor) = anchor else {
            return Mutation::unresolved(AnchorKind::Type, anchor);
        };

        let present = anchor.fields.items().any(|entry| match &entry.kind {
            EntryKind::Field { names, ty, .. } if names.is_empty() => embedded_name(ty) == name,
            EntryKind::Field { names, .. } => names.iter().any(|n| n == name),
            _ => false,
        });
        if present {
            return Mutation::unchanged(AnchorKind::Type, MutationOutcome::AlreadyPresent);
        }

        let cells = vec![name.to_string(), ty.to_string()];
        Mutation::inserted(
            AnchorKind::Type,
            name,
            self.append(&anchor.fields, cells, self.align),
        )
    }

    /// Add `key: value` to the constructor literal unless `key` is set
    #[must_use]
    pub fn add_initializer(
        &self,
        anchor: &Located<LiteralAnchor>,
        key: &str,
        value: &GoExpr,
    ) -> Mutation {
        let Located::Found(anchor) = anchor else {
            return Mutation::unresolved(AnchorKind::Constructor, anchor);
        };

        let present = anchor
            .elements
            .items()
            .any(|entry| matches!(&entry.kind, EntryKind::Keyed { key: k, .. } if k == key));
        if present {
            return Mutation::unchanged(AnchorKind::Constructor, MutationOutcome::AlreadyPresent);
        }

        let cells = vec![format!("{key}:"), format!("{value},")];
        Mutation::inserted(
            AnchorKind::Constructor,
            key,
            self.append(&anchor.elements, cells, self.align),
        )
    }

    /// Add the call built by `call` from the method's receiver name, unless
    /// a call through `<receiver>.field` exists
    #[must_use]
    pub fn add_registration(
        &self,
        anchor: &Located<MethodAnchor>,
        field: &str,
        call: impl FnOnce(&str) -> GoExpr,
    ) -> Mutation {
        let Located::Found(anchor) = anchor else {
            return Mutation::unresolved(AnchorKind::Method, anchor);
        };

        let present = anchor.body.items().any(|entry| {
            matches!(
                &entry.kind,
                EntryKind::Statement { selected_field: Some(selected) } if selected == field
            )
        });
        if present {
            return Mutation::unchanged(AnchorKind::Method, MutationOutcome::AlreadyPresent);
        }

        let call = call(&anchor.receiver);
        Mutation::inserted(
            AnchorKind::Method,
            field,
            self.append(&anchor.body, vec![call.to_string()], false),
        )
    }

    /// Append a row of cells as the last entry of `list`
    fn append(&self, list: &EntryList, cells: Vec<String>, aligned: bool) -> Splice {
        let last_row = list.entries.last().map_or(list.open_row, |e| e.end_row);
        if list.close_row == last_row {
            return self.expand(list, cells, aligned);
        }

        let nl = self.doc.line_ending();
        let outer = self.doc.indent_at(list.close);
        let inner = format!("{outer}\t");

        let lines = self.lines(list);
        let Some(last) = lines.last() else {
            let at = self.doc.line_end(list.open);
            return Splice::insert(at, format!("{nl}{inner}{}", cells.join(" ")));
        };

        let indent = if last.first_row == list.open_row {
            inner
        } else {
            self.doc.indent_at(last.start).to_string()
        };
        let at = self.doc.line_end(last.end);

        let section = if aligned { section_start(&lines) } else { lines.len() };
        if section == lines.len() {
            let row = render(&[cells], aligned).concat();
            return Splice::insert(at, format!("{nl}{indent}{row}"));
        }

        let mut rows: Vec<Vec<String>> = lines[section..]
            .iter()
            .filter_map(|line| line.cells.clone())
            .collect();
        rows.push(cells);
        let rendered = render(&rows, true);

        let mut text = String::new();
        for (line, row) in lines[section..].iter().zip(&rendered) {
            text.push_str(self.doc.indent_at(line.start));
            text.push_str(row);
            text.push_str(nl);
        }
        text.push_str(&indent);
        text.push_str(rendered.last().map_or("", String::as_str));

        let from = self.doc.line_start(lines[section].start);
        Splice::replace(from..at, text)
    }

    /// Rewrite a list whose closing delimiter shares a line with its last
    /// entry (or its opening delimiter) into one entry per line
    fn expand(&self, list: &EntryList, cells: Vec<String>, aligned: bool) -> Splice {
        let nl = self.doc.line_ending();
        let outer = self.doc.indent_at(list.close);

        let mut rows: Vec<Vec<String>> = list
            .entries
            .iter()
            .map(|entry| {
                cells_of(entry).unwrap_or_else(|| vec![self.entry_text(entry).to_string()])
            })
            .collect();
        rows.push(cells);

        let mut text = String::from(nl);
        for row in render(&rows, aligned) {
            text.push_str(outer);
            text.push('\t');
            text.push_str(&row);
            text.push_str(nl);
        }
        text.push_str(outer);

        Splice::replace(list.open + 1..list.close, text)
    }

    /// Group entries into physical lines
    ///
    /// A line shared with the opening delimiter never takes part in
    /// alignment: rewriting it would rewrite the declaration header.
    fn lines(&self, list: &EntryList) -> Vec<Line> {
        let mut lines: Vec<Line> = Vec::new();
        for entry in &list.entries {
            match lines.last_mut() {
                Some(line) if line.last_row == entry.start_row => {
                    line.end = entry.span.end;
                    line.last_row = entry.end_row;
                    match (&entry.kind, line.cells.as_mut()) {
                        (EntryKind::Comment { text }, Some(cells)) if entry.is_single_line() => {
                            cells.push(text.trim_end().to_string());
                        }
                        _ => line.cells = None,
                    }
                }
                _ => lines.push(Line {
                    first_row: entry.start_row,
                    last_row: entry.end_row,
                    start: entry.span.start,
                    end: entry.span.end,
                    cells: if entry.is_single_line() && entry.start_row != list.open_row {
                        cells_of(entry)
                    } else {
                        None
                    },
                }),
            }
        }
        lines
    }

    fn entry_text(&self, entry: &Entry) -> &'a str {
        self.doc
            .text()
            .get(entry.span.clone())
            .unwrap_or_default()
            .trim_end_matches('\r')
    }
}

/// Index of the first line of the alignment section ending at the last line
///
/// The section is the longest run of adjacent alignable lines. Blank lines,
/// comment-only lines, multi-line entries and the line of the opening
/// delimiter end it.
fn section_start(lines: &[Line]) -> usize {
    let mut start = lines.len();
    while start > 0 {
        let line = &lines[start - 1];
        if line.cells.is_none() {
            break;
        }
        if start < lines.len() && lines[start].first_row != line.last_row + 1 {
            break;
        }
        start -= 1;
    }
    start
}

fn render(rows: &[Vec<String>], aligned: bool) -> Vec<String> {
    if aligned {
        align(rows)
    } else {
        rows.iter().map(|cells| cells.join(" ")).collect()
    }
}

/// Cells of a field or keyed element, as gofmt separates them
fn cells_of(entry: &Entry) -> Option<Vec<String>> {
    match &entry.kind {
        EntryKind::Field { names, ty, tag } => {
            let mut cells = Vec::with_capacity(3);
            if !names.is_empty() {
                cells.push(names.join(", "));
            }
            cells.push(ty.clone());
            cells.extend(tag.iter().cloned());
            Some(cells)
        }
        EntryKind::Keyed { key, value } => Some(vec![format!("{key}:"), format!("{value},")]),
        _ => None,
    }
}

/// Implicit field name of an embedded field type: `*pkg.Name[T]` → `Name`
fn embedded_name(ty: &str) -> &str {
    let ty = ty.trim_start_matches('*');
    let ty = ty.split('[').next().unwrap_or(ty);
    ty.rsplit('.').next().unwrap_or(ty).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scaffold_source::Locator;

    fn apply(source: &str, splice: &Splice) -> String {
        let mut out = source.to_string();
        out.replace_range(splice.range.clone(), &splice.text);
        out
    }

    fn field_type() -> GoExpr {
        GoExpr::qualified("orders", "OrdersModule").pointer()
    }

    fn registration(field: &'static str) -> impl FnOnce(&str) -> GoExpr {
        move |receiver| {
            GoExpr::ident(receiver)
                .select(field)
                .select("RegisterRoutes")
                .call([GoExpr::ident("api")])
        }
    }

    #[test]
    fn field_appended_and_aligned() {
        let src = "package c\n\ntype Container struct {\n\tDB *sql.DB\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, true).add_field(&anchor, "OrdersModule", &field_type());
        assert_eq!(mutation.outcome, MutationOutcome::Inserted);
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct {\n\tDB           *sql.DB\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
    }

    #[test]
    fn field_on_brace_line_keeps_header() {
        let src = "package c\n\ntype Container struct { DB *sql.DB\n\tHealthModule *health.HealthModule\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, true).add_field(&anchor, "OrdersModule", &field_type());
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct { DB *sql.DB\n\tHealthModule *health.HealthModule\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
        GoSource::parse(out).unwrap();
    }

    #[test]
    fn field_appended_without_alignment() {
        let src = "package c\n\ntype Container struct {\n\tDB *sql.DB\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, false).add_field(&anchor, "OrdersModule", &field_type());
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct {\n\tDB *sql.DB\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
    }

    #[test]
    fn alignment_stops_at_blank_line_and_keeps_comments() {
        let src = "package c\n\ntype Container struct {\n\tVeryLongFieldName int\n\n\tDB *sql.DB // shared\n\tX  int\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, true).add_field(&anchor, "OrdersModule", &field_type());
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct {\n\tVeryLongFieldName int\n\n\tDB           *sql.DB // shared\n\tX            int\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
    }

    #[test]
    fn field_after_comment_line_is_not_aligned() {
        let src = "package c\n\ntype Container struct {\n\tDB *sql.DB\n\t// modules\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, true).add_field(&anchor, "OrdersModule", &field_type());
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct {\n\tDB *sql.DB\n\t// modules\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
    }

    #[test]
    fn empty_struct_is_expanded() {
        let src = "package c\n\ntype Container struct{}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).struct_type("Container");
        let mutation = Mutator::new(&doc, true).add_field(&anchor, "OrdersModule", &field_type());
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\ntype Container struct{\n\tOrdersModule *orders.OrdersModule\n}\n"
        );
    }

    #[test]
    fn duplicate_field_and_embedded_field_are_present() {
        let src = "package c\n\ntype Container struct {\n\tA, OrdersModule int\n}\n\ntype Other struct {\n\t*orders.OrdersModule\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let locator = Locator::new(&doc);
        let mutator = Mutator::new(&doc, true);
        for name in ["Container", "Other"] {
            let mutation = mutator.add_field(&locator.struct_type(name), "OrdersModule", &field_type());
            assert_eq!(mutation.outcome, MutationOutcome::AlreadyPresent);
            assert!(mutation.delta.is_none());
        }
    }

    #[test]
    fn unresolved_struct_outcomes() {
        let src = "package c\n\ntype Container int\n";
        let doc = GoSource::parse(src).unwrap();
        let locator = Locator::new(&doc);
        let mutator = Mutator::new(&doc, true);
        assert!(matches!(
            mutator.add_field(&locator.struct_type("Container"), "X", &field_type()).outcome,
            MutationOutcome::ShapeMismatch(_)
        ));
        assert_eq!(
            mutator.add_field(&locator.struct_type("Missing"), "X", &field_type()).outcome,
            MutationOutcome::AnchorNotFound
        );
    }

    #[test]
    fn initializer_into_empty_literal() {
        let src = "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{}\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).constructor_literal("NewContainer");
        let value = GoExpr::qualified("orders", "NewOrdersModule").call([GoExpr::ident("db")]);
        let mutation = Mutator::new(&doc, true).add_initializer(&anchor, "OrdersModule", &value);
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{\n\t\tOrdersModule: orders.NewOrdersModule(db),\n\t}\n}\n"
        );
    }

    #[test]
    fn initializer_into_single_line_literal() {
        let src = "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{DB: db}\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).constructor_literal("NewContainer");
        let value = GoExpr::qualified("orders", "NewOrdersModule").call([GoExpr::ident("db")]);
        let mutation = Mutator::new(&doc, true).add_initializer(&anchor, "OrdersModule", &value);
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{\n\t\tDB:           db,\n\t\tOrdersModule: orders.NewOrdersModule(db),\n\t}\n}\n"
        );
    }

    #[test]
    fn initializer_after_entry_on_brace_line() {
        let src = "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{DB: db,\n\t\tHealthModule: health.NewHealthModule(),\n\t}\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).constructor_literal("NewContainer");
        let value = GoExpr::qualified("orders", "NewOrdersModule").call([GoExpr::ident("db")]);
        let mutation = Mutator::new(&doc, true).add_initializer(&anchor, "OrdersModule", &value);
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{DB: db,\n\t\tHealthModule: health.NewHealthModule(),\n\t\tOrdersModule: orders.NewOrdersModule(db),\n\t}\n}\n"
        );
        GoSource::parse(out).unwrap();
    }

    #[test]
    fn crlf_line_endings_are_kept() {
        let src = "package c\n\nimport (\n\t\"fmt\"\n)\n\ntype Container struct {\n\tDB *sql.DB // pool\n}\n\nfunc NewContainer(db *sql.DB) *Container {\n\treturn &Container{DB: db}\n}\n"
            .replace('\n', "\r\n");
        let doc = GoSource::parse(src.as_str()).unwrap();
        let locator = Locator::new(&doc);
        let mutator = Mutator::new(&doc, true);
        let value = GoExpr::qualified("orders", "NewOrdersModule").call([GoExpr::ident("db")]);

        let mut splices = [
            mutator.add_import(&locator.imports(), "app/orders"),
            mutator.add_field(&locator.struct_type("Container"), "OrdersModule", &field_type()),
            mutator.add_initializer(&locator.constructor_literal("NewContainer"), "OrdersModule", &value),
        ]
        .map(|m| m.delta.unwrap().splice);
        splices.sort_by_key(|splice| std::cmp::Reverse(splice.range.start));
        let out = splices.iter().fold(src.clone(), |text, splice| apply(&text, splice));

        assert!(!out.replace("\r\n", "").contains(['\r', '\n']));
        assert!(out.contains("\t\"fmt\"\r\n\t\"app/orders\"\r\n)"));
        assert!(out.contains("\tDB           *sql.DB // pool\r\n\tOrdersModule *orders.OrdersModule\r\n}"));
        assert!(out.contains("\t\tDB:           db,\r\n\t\tOrdersModule: orders.NewOrdersModule(db),\r\n\t}"));
        GoSource::parse(out).unwrap();
    }

    #[test]
    fn registration_into_empty_body() {
        let src = "package c\n\nfunc (c *Container) RegisterRoutes(api *gin.RouterGroup) {\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).method_body("Container", "RegisterRoutes");
        let mutation =
            Mutator::new(&doc, true).add_registration(&anchor, "OrdersModule", registration("OrdersModule"));
        let out = apply(src, &mutation.delta.unwrap().splice);
        assert_eq!(
            out,
            "package c\n\nfunc (c *Container) RegisterRoutes(api *gin.RouterGroup) {\n\tc.OrdersModule.RegisterRoutes(api)\n}\n"
        );
    }

    #[test]
    fn registration_uses_receiver_and_detects_duplicates() {
        let src = "package c\n\nfunc (ctr *Container) RegisterRoutes(r *gin.Engine) {\n\tapi := r.Group(\"/api/v1\")\n\tctr.OrdersModule.RegisterRoutes(api, extra)\n}\n";
        let doc = GoSource::parse(src).unwrap();
        let anchor = Locator::new(&doc).method_body("Container", "RegisterRoutes");
        let mutator = Mutator::new(&doc, true);

        let present = mutator.add_registration(&anchor, "OrdersModule", registration("OrdersModule"));
        assert_eq!(present.outcome, MutationOutcome::AlreadyPresent);

        let added = mutator.add_registration(&anchor, "UsersModule", registration("UsersModule"));
        let out = apply(src, &added.delta.unwrap().splice);
        assert!(out.contains(
            "\tctr.OrdersModule.RegisterRoutes(api, extra)\n\tctr.UsersModule.RegisterRoutes(api)\n}"
        ));
    }

    #[test]
    fn import_into_group_single_and_none() {
        let grouped = "package c\n\nimport (\n\t\"fmt\"\n)\n";
        let doc = GoSource::parse(grouped).unwrap();
        let mutation = Mutator::new(&doc, true).add_import(&Locator::new(&doc).imports(), "app/x");
        assert_eq!(
            apply(grouped, &mutation.delta.unwrap().splice),
            "package c\n\nimport (\n\t\"fmt\"\n\t\"app/x\"\n)\n"
        );

        let single = "package c\n\nimport \"fmt\"\n";
        let doc = GoSource::parse(single).unwrap();
        let mutation = Mutator::new(&doc, true).add_import(&Locator::new(&doc).imports(), "app/x");
        assert_eq!(
            apply(single, &mutation.delta.unwrap().splice),
            "package c\n\nimport (\n\t\"fmt\"\n\t\"app/x\"\n)\n"
        );

        let none = "package c\n\ntype T struct{}\n";
        let doc = GoSource::parse(none).unwrap();
        let mutation = Mutator::new(&doc, true).add_import(&Locator::new(&doc).imports(), "app/x");
        assert_eq!(
            apply(none, &mutation.delta.unwrap().splice),
            "package c\n\nimport (\n\t\"app/x\"\n)\n\ntype T struct{}\n"
        );
    }

    #[test]
    fn import_already_present_in_later_declaration() {
        let src = "package c\n\nimport \"fmt\"\n\nimport \"app/x\"\n";
        let doc = GoSource::parse(src).unwrap();
        let mutation = Mutator::new(&doc, true).add_import(&Locator::new(&doc).imports(), "app/x");
        assert_eq!(mutation.outcome, MutationOutcome::AlreadyPresent);
    }

    #[test]
    fn embedded_names() {
        assert_eq!(embedded_name("*orders.OrdersModule"), "OrdersModule");
        assert_eq!(embedded_name("Base"), "Base");
        assert_eq!(embedded_name("pkg.List[int]"), "List");
    }
}
