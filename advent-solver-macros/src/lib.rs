//! Procedural macros for the advent-solver framework

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro registering a solver with the plugin system.
///
/// Generates an `inventory::submit!` entry so the solver is discovered
/// by `RegistryBuilder::register_all_plugins` without any manual wiring.
///
/// # Attributes
///
/// - `year`: required, the event year (e.g. 2025)
/// - `day`: required, the day number (1-25)
/// - `tags`: optional array of string literals for filtering
///
/// The type must implement the `Puzzle` trait; a missing implementation
/// is reported as an unsatisfied trait bound at the derive site.
///
/// # Example
///
/// ```ignore
/// use advent_solver::{AutoRegisterPuzzle, Puzzle};
///
/// #[derive(AutoRegisterPuzzle)]
/// #[puzzle(year = 2025, day = 1, tags = ["grid"])]
/// pub struct Solver;
///
/// impl Puzzle for Solver {
///     // ...
/// }
/// ```
#[proc_macro_derive(AutoRegisterPuzzle, attributes(puzzle))]
pub fn derive_auto_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegisterPuzzle requires a #[puzzle(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit) = value {
                year = Some(lit.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit) = value {
                day = Some(lit.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("failed to parse #[puzzle(...)] attribute");

    let year = year.expect("#[puzzle(...)] is missing the required 'year' attribute");
    let day = day.expect("#[puzzle(...)] is missing the required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Surfaces a readable unsatisfied-bound error when Puzzle is
        // not implemented for the annotated type.
        const _: () = {
            trait MustImplementPuzzle: ::advent_solver::Puzzle {}
            impl MustImplementPuzzle for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::PuzzlePlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
