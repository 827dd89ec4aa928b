use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// What the generator needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfgs: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "cstudio_error requires named fields for source/context handling",
            ));
        };

        let mut has_context = false;
        let mut source = None;
        for field in &fields.named {
            let Some(ident) = field.ident.as_ref() else { continue };
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if source.is_none() && is_source_field(ident, field) {
                source = Some((ident, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "cstudio_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            cfgs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    try_expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "cstudio_error can only be applied to enums",
        ));
    };

    let variants = data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &::core::option::Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let present = derived_trait_names(attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }
    if derives.is_empty() {
        return quote! {};
    }
    quote! { #[derive(#(#derives),*)] }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfgs = &v.cfgs;
        quote! { #(#cfgs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext<T> {
            /// Attaches a human-readable context to the error, if any.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #name> {
            #[inline]
            #[allow(unused_variables, unreachable_patterns)]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #(#arms)*
                        _ => {}
                    }
                    e
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    if v.ident == "Internal" {
        return None;
    }
    let (field, ty) = v.source?;
    let ident = v.ident;
    let cfgs = &v.cfgs;

    Some(quote! {
        #(#cfgs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfgs)*
        #[automatically_derived]
        impl<T> #ext<T> for ::core::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::core::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote! {};
    };
    let cfgs = &internal.cfgs;

    quote! {
        #(#cfgs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Borrowed(s), context: None }
            }
        }

        #(#cfgs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self {
                Self::Internal { message: ::std::borrow::Cow::Owned(s), context: None }
            }
        }
    }
}

fn is_source_field(ident: &Ident, field: &Field) -> bool {
    ident == "source"
        || field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("source") || attr.path().is_ident("from"))
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

/// Matches `Option<Cow<'static, str>>` (any path prefix on either type).
fn is_context_type(ty: &Type) -> bool {
    let Some(option_args) = last_segment_args(ty, "Option") else {
        return false;
    };
    let Some(GenericArgument::Type(cow)) = option_args.first() else {
        return false;
    };
    let Some(cow_args) = last_segment_args(cow, "Cow") else {
        return false;
    };

    let mut args = cow_args.iter();
    let is_static =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let is_str = matches!(
        args.next(),
        Some(GenericArgument::Type(Type::Path(p)))
            if p.path.segments.last().is_some_and(|s| s.ident == "str")
    );
    is_static && is_str
}

fn last_segment_args<'a>(ty: &'a Type, expected: &str) -> Option<Vec<&'a GenericArgument>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != expected {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    Some(args.args.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expanded(input: DeriveInput) -> String {
        expand(input).to_string()
    }

    #[test]
    fn rejects_structs() {
        let out = expanded(parse_quote! {
            pub struct NotAnEnum { message: String }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("can only be applied to enums"));
    }

    #[test]
    fn rejects_tuple_variants() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("IO error: {0}")]
                Io(std::io::Error),
            }
        });
        assert!(out.contains("requires named fields"));
    }

    #[test]
    fn rejects_source_without_context() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("IO error: {source}")]
                Io { #[source] source: std::io::Error },
            }
        });
        assert!(out.contains("for variants with a source"));
    }

    #[test]
    fn rejects_bad_context_type() {
        let out = expanded(parse_quote! {
            pub enum DemoError {
                #[error("Bad: {message}")]
                Bad { message: String, context: Option<String> },
            }
        });
        assert!(out.contains("context field must be"));
    }

    #[test]
    fn generates_ext_trait_and_conversions() {
        let out = expanded(parse_quote! {
            pub enum LicenseError {
                #[error("Io{}: {source}", format_context(.context))]
                Io { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
                #[error("Internal{}: {message}", format_context(.context))]
                Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
            }
        });
        assert!(out.contains("pub trait LicenseErrorExt"));
        assert!(out.contains("impl From < std :: io :: Error > for LicenseError"));
        assert!(out.contains("impl From < & 'static str > for LicenseError"));
        assert!(out.contains(":: thiserror :: Error"));
    }

    #[test]
    fn keeps_existing_derives() {
        let out = expanded(parse_quote! {
            #[derive(Debug)]
            pub enum DemoError {
                #[error("Internal: {message}")]
                Internal { message: String },
            }
        });
        assert_eq!(out.matches("Debug").count(), 1);
    }
}
