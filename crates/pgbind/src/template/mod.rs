//! SQL templates with named `:placeholders`.
//!
//! A [`Parser`] owns the template text and, once scanned, the ordered list of
//! placeholder [`Occurrence`]s. Scanning happens at most once and the result is
//! immutable afterwards, so a scanned parser can be shared between threads and
//! between any number of [`Binder`](crate::Binder)s.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use pgbind::Parser;
//!
//! let parser = Parser::new("SELECT * FROM users WHERE id = :id -- :ignored");
//! assert_eq!(parser.placeholders()?, vec![":id"]);
//!
//! let values = HashMap::from([(":id".to_string(), "42".to_string())]);
//! assert_eq!(
//!     parser.substitute(&values)?,
//!     "SELECT * FROM users WHERE id = 42 -- :ignored"
//! );
//! # Ok::<(), pgbind::BindError>(())
//! ```

mod scan;
mod substitute;

#[cfg(test)]
mod tests;

use crate::error::BindResult;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Marker that starts a placeholder name.
pub const PLACEHOLDER_MARKER: char = ':';

/// A placeholder found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    name: String,
    position: usize,
}

impl Occurrence {
    /// Placeholder name including the leading `:`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte offset of the leading `:` in the template.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset just past the placeholder name.
    pub fn end(&self) -> usize {
        self.position + self.name.len()
    }
}

#[derive(Debug)]
struct Scanned {
    occurrences: Vec<Occurrence>,
    // name -> index of the last occurrence with that name
    by_name: HashMap<String, usize>,
}

impl Scanned {
    fn new(occurrences: Vec<Occurrence>) -> Self {
        let by_name = occurrences
            .iter()
            .enumerate()
            .map(|(i, occ)| (occ.name.clone(), i))
            .collect();
        Self {
            occurrences,
            by_name,
        }
    }
}

/// Scanner for `:name` placeholders in a SQL template.
#[derive(Debug)]
pub struct Parser {
    template: String,
    scanned: OnceLock<Scanned>,
}

impl Parser {
    /// Create an unscanned parser that owns `template`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            scanned: OnceLock::new(),
        }
    }

    /// The template text.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether [`scan`](Self::scan) has already completed successfully.
    pub fn is_scanned(&self) -> bool {
        self.scanned.get().is_some()
    }

    /// Scan the template for placeholders.
    ///
    /// Once a scan has succeeded further calls are no-ops. A failed scan
    /// records nothing, so calling again fails again with the same error.
    pub fn scan(&self) -> BindResult<()> {
        self.scanned().map(|_| ())
    }

    fn scanned(&self) -> BindResult<&Scanned> {
        if let Some(scanned) = self.scanned.get() {
            return Ok(scanned);
        }
        let scanned = Scanned::new(scan::scan_template(&self.template)?);
        Ok(self.scanned.get_or_init(|| scanned))
    }

    /// Placeholder occurrences in template order, scanning first if needed.
    pub fn occurrences(&self) -> BindResult<&[Occurrence]> {
        Ok(&self.scanned()?.occurrences)
    }

    /// Placeholder names in template order. Repeated placeholders appear once
    /// per occurrence.
    pub fn placeholders(&self) -> BindResult<Vec<&str>> {
        Ok(self.occurrences()?.iter().map(Occurrence::name).collect())
    }

    /// Check whether the template contains a placeholder.
    ///
    /// The leading `:` is optional. The argument is lower-cased before the
    /// lookup while scanned names keep their case, so a placeholder written
    /// with upper-case letters is never reported. Substitution itself is
    /// case-sensitive. Returns `false` if the template fails to scan.
    pub fn has_placeholder(&self, name: &str) -> bool {
        let Ok(scanned) = self.scanned() else {
            return false;
        };
        let name = name.to_lowercase();
        if name.starts_with(PLACEHOLDER_MARKER) {
            scanned.by_name.contains_key(&name)
        } else {
            scanned
                .by_name
                .contains_key(&format!("{PLACEHOLDER_MARKER}{name}"))
        }
    }

    /// Substitute literals into the template.
    ///
    /// `values` maps placeholder names (with the leading `:`) to literal SQL
    /// text. Fails with [`BindError::MissingBindValue`](crate::BindError::MissingBindValue)
    /// for the first placeholder without a value.
    pub fn substitute(&self, values: &HashMap<String, String>) -> BindResult<String> {
        let scanned = self.scanned()?;
        substitute::substitute(&self.template, &scanned.occurrences, values)
    }
}
