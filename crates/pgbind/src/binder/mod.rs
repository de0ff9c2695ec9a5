//! Binding values to a template and rendering the final SQL.
//!
//! # Example
//!
//! ```
//! use pgbind::Binder;
//!
//! let mut binder = Binder::new("SELECT * FROM t WHERE a = :x AND b::int = :y");
//! binder.bind("x", 5)?.bind(":y", "hi")?;
//! assert_eq!(binder.render()?, "SELECT * FROM t WHERE a = 5 AND b::int = E'hi'");
//! # Ok::<(), pgbind::BindError>(())
//! ```


use crate::cache::TemplateCache;
use crate::error::{BindError, BindResult};
use crate::literal::{self, Json, ToSqlValue};
use crate::options::BindOptions;
use crate::template::{PLACEHOLDER_MARKER, Parser};
use crate::trace;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// One render of one template.
///
/// A binder collects literals for the template's placeholders and renders the
/// SQL once; after that it only hands out the rendered string until
/// [`clear`](Self::clear) is called. The parser is shared, so creating a binder
/// for a cached template does not rescan it.
#[derive(Debug, Clone)]
pub struct Binder {
    parser: Arc<Parser>,
    values: HashMap<String, String>,
    options: BindOptions,
    sql: Option<String>,
}

impl Binder {
    /// Create a binder for an uncached template.
    pub fn new(template: impl Into<String>) -> Self {
        Self::from_parser(Arc::new(Parser::new(template)))
    }

    /// Create a binder whose parser comes from `cache` under `key`.
    ///
    /// An empty key bypasses the cache.
    ///
    /// # Panics
    ///
    /// If `key` is already cached for a template of a different length.
    pub fn with_cache(cache: &TemplateCache, key: &str, template: &str) -> Self {
        Self::from_parser(cache.get_parser(key, template))
    }

    /// Create a binder using the process-wide cache.
    ///
    /// # Panics
    ///
    /// If `key` is already cached for a template of a different length.
    pub fn cached(key: &str, template: &str) -> Self {
        Self::with_cache(TemplateCache::global(), key, template)
    }

    /// Create a binder over an existing parser.
    pub fn from_parser(parser: Arc<Parser>) -> Self {
        Self {
            parser,
            values: HashMap::new(),
            options: BindOptions::default(),
            sql: None,
        }
    }

    /// Set the default options used by [`bind`](Self::bind).
    pub fn with_options(mut self, options: BindOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying parser.
    pub fn parser(&self) -> &Arc<Parser> {
        &self.parser
    }

    /// The template text.
    pub fn template(&self) -> &str {
        self.parser.template()
    }

    /// Bind a value to a placeholder. The leading `:` is optional.
    pub fn bind(&mut self, name: &str, value: impl ToSqlValue) -> BindResult<&mut Self> {
        self.bind_with(name, value, self.options)
    }

    /// Bind a value using explicit formatting options.
    pub fn bind_with(
        &mut self,
        name: &str,
        value: impl ToSqlValue,
        options: BindOptions,
    ) -> BindResult<&mut Self> {
        let name = self.check_name(name)?;
        let literal = literal::encode_value(&value, options)?;
        self.values.insert(name.into_owned(), literal.into_string());
        Ok(self)
    }

    /// Bind any `Serialize` value as a JSON document.
    pub fn bind_json<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> BindResult<&mut Self> {
        self.bind(name, Json(value))
    }

    /// Bind every `(name, value)` pair.
    ///
    /// Stops at the first error. Pairs bound before the error stay bound.
    pub fn bind_all<I, K, V>(&mut self, values: I) -> BindResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToSqlValue,
    {
        for (name, value) in values {
            self.bind(name.as_ref(), value)?;
        }
        Ok(self)
    }

    fn check_name<'a>(&self, name: &'a str) -> BindResult<Cow<'a, str>> {
        if name.is_empty() {
            return Err(BindError::EmptyVariableName);
        }
        let name = normalize_name(name);
        if self.sql.is_some() {
            return Err(BindError::BindAfterFinalize(name.into_owned()));
        }
        if self.values.contains_key(name.as_ref()) {
            return Err(BindError::DuplicateBind(name.into_owned()));
        }
        Ok(name)
    }

    /// Render the SQL.
    ///
    /// The first successful call substitutes the bound literals and stores the
    /// result; later calls return it unchanged and further binds fail. A
    /// missing value leaves the binder open so it can be bound and rendered
    /// again.
    pub fn render(&mut self) -> BindResult<&str> {
        let sql = match self.sql.take() {
            Some(sql) => sql,
            None => {
                let sql = self.parser.substitute(&self.values)?;
                trace::rendered(&sql, self.values.len());
                sql
            }
        };
        Ok(self.sql.insert(sql).as_str())
    }

    /// Render and take the SQL.
    pub fn into_sql(mut self) -> BindResult<String> {
        self.render()?;
        Ok(self.sql.unwrap_or_default())
    }

    /// Whether [`render`](Self::render) has succeeded.
    pub fn is_rendered(&self) -> bool {
        self.sql.is_some()
    }

    /// Drop all bound values and the rendered SQL. The parser is kept.
    pub fn clear(&mut self) {
        self.values.clear();
        self.sql = None;
    }

    /// Check whether the template contains a placeholder.
    ///
    /// See [`Parser::has_placeholder`] for the case rules.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.parser.has_placeholder(name)
    }

    /// Placeholder names in template order, one entry per occurrence.
    pub fn placeholders(&self) -> BindResult<Vec<&str>> {
        self.parser.placeholders()
    }

    /// Names bound so far (with the leading `:`), in no particular order.
    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The literal bound to a placeholder.
    pub fn bound_literal(&self, name: &str) -> Option<&str> {
        self.values.get(normalize_name(name).as_ref()).map(String::as_str)
    }
}

fn normalize_name(name: &str) -> Cow<'_, str> {
    if name.starts_with(PLACEHOLDER_MARKER) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{PLACEHOLDER_MARKER}{name}"))
    }
}

/// Render `template` with a single bound value.
///
/// A non-empty `key` caches the scanned template in the process-wide cache.
///
/// ```
/// let sql = pgbind::bind_one("SELECT * FROM t WHERE id=:id", "id", 7, "")?;
/// assert_eq!(sql, "SELECT * FROM t WHERE id=7");
/// # Ok::<(), pgbind::BindError>(())
/// ```
pub fn bind_one(
    template: &str,
    name: &str,
    value: impl ToSqlValue,
    key: &str,
) -> BindResult<String> {
    let mut binder = Binder::cached(key, template);
    binder.bind(name, value)?;
    binder.into_sql()
}

/// Render `template` with all `(name, value)` pairs bound.
///
/// A non-empty `key` caches the scanned template in the process-wide cache.
pub fn bind<I, K, V>(template: &str, values: I, key: &str) -> BindResult<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToSqlValue,
{
    let mut binder = Binder::cached(key, template);
    binder.bind_all(values)?;
    binder.into_sql()
}
