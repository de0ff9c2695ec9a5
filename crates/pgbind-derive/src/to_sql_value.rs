//! `#[derive(ToSqlValue)]`: bind a caller-defined type as a SQL literal.

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, Meta, Result, Token,
    parse_quote,
};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let mut generics = input.generics.clone();

    let body = if parse_display(&input.attrs)? {
        quote! {
            ::std::result::Result::Ok(::pgbind::SqlValue::display(self))
        }
    } else {
        match &input.data {
            Data::Struct(s) => {
                let field = only_field(&input, &s.fields)?;
                if !generics.params.is_empty() {
                    let ty = &field.ty;
                    generics
                        .make_where_clause()
                        .predicates
                        .push(parse_quote!(#ty: ::pgbind::literal::ToSqlValue));
                }
                let access = match &field.ident {
                    Some(ident) => quote! { self.#ident },
                    None => quote! { self.0 },
                };
                quote! {
                    ::pgbind::literal::ToSqlValue::to_sql_value(&#access)
                }
            }
            Data::Enum(e) => {
                let mut arms = Vec::new();
                for variant in &e.variants {
                    if !matches!(&variant.fields, Fields::Unit) {
                        return Err(syn::Error::new_spanned(
                            variant,
                            "ToSqlValue enum variants must be unit variants (no fields); \
                             use #[sql(display)] on the enum instead",
                        ));
                    }
                    let variant_ident = &variant.ident;
                    let sql_name = parse_rename(&variant.attrs)?
                        .unwrap_or_else(|| variant_ident.to_string().to_snake_case());
                    arms.push(quote! {
                        #name::#variant_ident => #sql_name,
                    });
                }
                if arms.is_empty() {
                    return Err(syn::Error::new_spanned(
                        &input,
                        "ToSqlValue cannot be derived for an enum without variants",
                    ));
                }
                quote! {
                    let s: &str = match self {
                        #(#arms)*
                    };
                    ::std::result::Result::Ok(::pgbind::SqlValue::Text(s.to_string()))
                }
            }
            Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "ToSqlValue cannot be derived for unions",
                ));
            }
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::pgbind::literal::ToSqlValue for #name #ty_generics #where_clause {
            fn to_sql_value(&self) -> ::pgbind::BindResult<::pgbind::SqlValue> {
                #body
            }
        }
    })
}

/// The only field of a tuple or named struct.
fn only_field<'a>(input: &DeriveInput, fields: &'a Fields) -> Result<&'a Field> {
    let mut iter = fields.iter();
    match (iter.next(), iter.next()) {
        (Some(field), None) => Ok(field),
        _ => Err(syn::Error::new_spanned(
            input,
            "ToSqlValue can only be derived for structs with exactly one field; \
             use #[sql(display)] for other structs",
        )),
    }
}

fn sql_metas(attrs: &[Attribute]) -> Result<Vec<Meta>> {
    let mut metas = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("sql") {
            continue;
        }
        let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        metas.extend(nested);
    }
    Ok(metas)
}

/// Parse `#[sql(display)]` from the container attributes.
fn parse_display(attrs: &[Attribute]) -> Result<bool> {
    let mut display = false;
    for meta in sql_metas(attrs)? {
        match &meta {
            Meta::Path(path) if path.is_ident("display") => display = true,
            _ => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "unknown sql attribute, expected `display`",
                ));
            }
        }
    }
    Ok(display)
}

/// Parse `#[sql(rename = "...")]` from a variant's attributes.
fn parse_rename(attrs: &[Attribute]) -> Result<Option<String>> {
    let mut rename = None;
    for meta in sql_metas(attrs)? {
        if let Meta::NameValue(nv) = &meta {
            if nv.path.is_ident("rename") {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = &nv.value
                {
                    rename = Some(s.value());
                    continue;
                }
            }
        }
        return Err(syn::Error::new_spanned(
            meta,
            "unknown sql attribute, expected `rename = \"...\"`",
        ));
    }
    Ok(rename)
}
