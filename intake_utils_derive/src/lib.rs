use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Wraps a function in a debug level `tracing` span named after it.
///
/// Arguments are never recorded, since they usually carry the contents of a
/// contact request. Record what is safe explicitly, e.g.
/// `#[trace_instrument(fields(field = %field), ret(level = "trace"))]`.
/// Any arguments are forwarded to `#[tracing::instrument(...)]`.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    if let Some(asyncness) = sig.asyncness {
        return syn::Error::new_spanned(asyncness, "trace_instrument does not support async fns")
            .to_compile_error()
            .into();
    }

    let meta = if meta.is_empty() {
        quote! { level = "debug", skip_all }
    } else {
        quote! { level = "debug", skip_all, #meta }
    };

    quote! {
        #[::tracing::instrument(#meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
