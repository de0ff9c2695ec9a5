//! Render a few statements with named placeholders.
//!
//! Run with:
//!   cargo run -p pgbind --example named_binds

use pgbind::{BindOptions, BindResult, Binder, Json, params};
use serde::Serialize;

#[derive(Serialize)]
struct AuditEvent<'a> {
    actor: &'a str,
    action: &'a str,
}

#[derive(pgbind::ToSqlValue)]
enum Role {
    Admin,
    ReadOnly,
}

fn main() -> BindResult<()> {
    // Cached by key: the template is scanned once.
    for id in [1_i64, 2, 3] {
        let mut binder = Binder::cached(
            "users.by_id",
            "SELECT id, name FROM users WHERE id = :id -- :id in a comment is ignored",
        );
        binder.bind("id", id)?;
        println!("{}", binder.render()?);
    }

    let sql = pgbind::bind(
        "INSERT INTO audit (role, payload, note) VALUES (:role, :payload::jsonb, :note)",
        params! {
            "role" => Role::Admin,
            "payload" => Json(AuditEvent { actor: "o'neil", action: "login" }),
            "note" => None::<String>,
        },
        "audit.insert",
    )?;
    println!("{sql}");

    let mut binder = Binder::new("SELECT jsonb_path_exists(doc, '$.role ? (@ == $r)', :vars)");
    let role = pgbind::to_json_path(&Role::ReadOnly)?;
    binder.bind_with("vars", format!(r#"{{"r": {role}}}"#), BindOptions::new())?;
    println!("{}", binder.render()?);

    Ok(())
}
