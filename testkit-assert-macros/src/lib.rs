//! Procedural macros for testkit-assert
//!
//! This crate provides the `#[testkit_assert::soft_test]` attribute macro for
//! writing tests that collect every failed check and report them together.
//!
//! # Example
//!
//! ```rust,ignore
//! use testkit_assert::prelude::*;
//!
//! #[testkit_assert::soft_test]
//! fn hobbits(softly: SoftAssertions) {
//!     softly.assert_that("Frodo").starts_with("Fro");
//!     softly.assert_that(33).is_greater_than(30);
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, FnArg, Ident, ItemFn, Lit, Pat, Token, Type,
};

/// Configuration options for the soft test macro.
#[derive(Default)]
struct SoftTestConfig {
    /// Heading of the aggregate failure report
    description: Option<String>,
}

impl Parse for SoftTestConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut config = SoftTestConfig::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "description" => {
                    let lit: Lit = input.parse()?;
                    match lit {
                        Lit::Str(s) => config.description = Some(s.value()),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "description must be a string literal",
                            ));
                        }
                    }
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {ident}"),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(config)
    }
}

/// Determines if a function parameter is requesting a soft assertion session.
fn is_session_param(arg: &FnArg) -> bool {
    if let FnArg::Typed(pat_type) = arg {
        if let Type::Path(type_path) = &*pat_type.ty {
            if let Some(segment) = type_path.path.segments.last() {
                return segment.ident == "SoftAssertions";
            }
        }
    }
    false
}

/// Extracts the parameter name from a function argument.
fn get_param_name(arg: &FnArg) -> Option<&Pat> {
    if let FnArg::Typed(pat_type) = arg {
        Some(&pat_type.pat)
    } else {
        None
    }
}

/// Test attribute macro that runs the body inside a soft assertion session.
///
/// The function may take one `SoftAssertions` parameter. It receives a fresh
/// session, and every failure collected through it is reported together when
/// the body ends. The test then fails with the aggregate message.
///
/// # Basic Usage
///
/// ```rust,ignore
/// use testkit_assert::prelude::*;
///
/// #[testkit_assert::soft_test]
/// fn test_ring(softly: SoftAssertions) {
///     softly.assert_that("ring").has_length(4);
///     softly.assert_that(vec![1, 2]).contains([2]);
/// }
/// ```
///
/// # Configuration Options
///
/// - `description = "..."` - Heading of the aggregate failure report
///
/// ```rust,ignore
/// #[testkit_assert::soft_test(description = "fellowship")]
/// fn test_fellowship(softly: SoftAssertions) {
///     softly.assert_that(9).is_equal_to(9);
/// }
/// ```
#[proc_macro_attribute]
pub fn soft_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let config = parse_macro_input!(attr as SoftTestConfig);
    let input = parse_macro_input!(item as ItemFn);

    expand_soft_test(&config, &input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_soft_test(config: &SoftTestConfig, input: &ItemFn) -> syn::Result<TokenStream2> {
    let name = &input.sig.ident;
    let body = &input.block;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let output = &input.sig.output;

    if input.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            input.sig.asyncness,
            "soft tests must not be async; use assert_that_completed for futures",
        ));
    }

    let mut session_name = None;
    for arg in &input.sig.inputs {
        if !is_session_param(arg) {
            return Err(syn::Error::new_spanned(
                arg,
                "soft tests only accept a single `SoftAssertions` parameter",
            ));
        }
        if session_name.is_some() {
            return Err(syn::Error::new_spanned(
                arg,
                "soft tests take at most one `SoftAssertions` parameter",
            ));
        }
        session_name = get_param_name(arg);
    }

    let session = match &config.description {
        Some(description) => quote! {
            ::testkit_assert::soft::SoftAssertionsGuard::with_description(#description)
        },
        None => quote! { ::testkit_assert::soft::SoftAssertionsGuard::new() },
    };

    // Without a parameter the session is still opened so that nested
    // helpers can be handed `&SoftAssertions` explicitly.
    let binding = match session_name {
        Some(pat) => quote! { let #pat = #session; },
        None => quote! { let _softly = #session; },
    };

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        #vis fn #name() #output {
            #binding
            #body
        }
    })
}
