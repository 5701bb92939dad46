use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Declare a color model: a plain value type with one public field per color
/// component.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must name each of their components.");
        }
        .into();
    }

    if !matches!(input.fields.len(), 3 | 4) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models are plain values and can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    // Make sure all the components are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its components.
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return the components of this color as a tuple.
            pub const fn to_components(&self) -> (#(#field_types),*) {
                (#(self.#field_names),*)
            }
        }

        impl From<(#(#field_types),*)> for #struct_name {
            fn from((#(#field_names),*): (#(#field_types),*)) -> Self {
                Self::new(#(#field_names),*)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
