//! Derived module names
//!
//! Every identifier the augmentation inserts is derived from the module
//! identifier by one canonical scheme:
//!
//! | derived      | `user_roles`                         |
//! |--------------|--------------------------------------|
//! | package      | `user_roles`                         |
//! | title        | `UserRoles`                          |
//! | field        | `UserRolesModule`                    |
//! | module type  | `*user_roles.UserRolesModule`        |
//! | constructor  | `user_roles.NewUserRolesModule`      |
//! | registration | `c.UserRolesModule.RegisterRoutes`   |

use crate::error::ValidationError;
use scaffold_source::GoExpr;

const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Names derived from a validated module identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleNames {
    package: String,
    title: String,
}

impl ModuleNames {
    /// Validate `name` and derive its names
    ///
    /// # Errors
    /// Returns `ValidationError` unless `name` is a lower-case Go identifier
    /// (`a-z` first, then `a-z`, `0-9`, single inner `_`) that is not a keyword.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate(name)?;
        let title = name
            .split('_')
            .map(capitalize)
            .collect::<String>();
        Ok(Self {
            package: name.to_string(),
            title,
        })
    }

    /// Go package name (the identifier itself)
    #[inline]
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Title-cased identifier: `UserRoles`
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Container field and literal key: `UserRolesModule`
    #[inline]
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("{}Module", self.title)
    }

    /// Container field type: `*user_roles.UserRolesModule`
    #[must_use]
    pub fn module_type(&self) -> GoExpr {
        GoExpr::qualified(&self.package, self.field_name()).pointer()
    }

    /// Module constructor call: `user_roles.NewUserRolesModule(db)`
    #[must_use]
    pub fn constructor_call(&self, database_handle: &str) -> GoExpr {
        GoExpr::qualified(&self.package, format!("New{}Module", self.title))
            .call([GoExpr::ident(database_handle)])
    }

    /// Route registration call: `c.UserRolesModule.RegisterRoutes(api)`
    #[must_use]
    pub fn registration_call(&self, receiver: &str, method: &str, route_group: &str) -> GoExpr {
        GoExpr::ident(receiver)
            .select(self.field_name())
            .select(method)
            .call([GoExpr::ident(route_group)])
    }

    /// Import path of the module package
    #[must_use]
    pub fn import_path(&self, go_module: &str, modules_dir: &str) -> String {
        let go_module = go_module.trim_end_matches('/');
        let modules_dir = modules_dir.trim_matches('/');
        if modules_dir.is_empty() {
            format!("{go_module}/{}", self.package)
        } else {
            format!("{go_module}/{modules_dir}/{}", self.package)
        }
    }
}

fn validate(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(ValidationError::Empty)?;
    if !first.is_ascii_lowercase() {
        return Err(ValidationError::InvalidStart(name.to_string()));
    }
    if let Some(ch) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')) {
        return Err(ValidationError::InvalidCharacter {
            name: name.to_string(),
            ch,
        });
    }
    if name.ends_with('_') || name.contains("__") {
        return Err(ValidationError::MisplacedUnderscore(name.to_string()));
    }
    if GO_KEYWORDS.contains(&name) {
        return Err(ValidationError::Keyword(name.to_string()));
    }
    Ok(())
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
