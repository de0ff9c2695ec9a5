/// Build a list of `(name, value)` pairs with mixed value types.
///
/// The result can be passed to [`bind`](crate::bind) or
/// [`Binder::bind_all`](crate::Binder::bind_all).
///
/// ```
/// use pgbind::params;
///
/// let sql = pgbind::bind(
///     "UPDATE users SET name = :name, age = :age WHERE id = :id",
///     params! { "name" => "Ann", "age" => 31, "id" => 7_i64 },
///     "",
/// )?;
/// assert_eq!(sql, "UPDATE users SET name = E'Ann', age = 31 WHERE id = 7");
/// # Ok::<(), pgbind::BindError>(())
/// ```
#[macro_export]
macro_rules! params {
    ($($name:expr => $value:expr),* $(,)?) => {
        ::std::vec![
            $((
                $name,
                ::std::boxed::Box::new($value)
                    as ::std::boxed::Box<dyn $crate::ToSqlValue + '_>
            )),*
        ]
    };
}
