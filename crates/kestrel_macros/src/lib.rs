use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, Type};

/// Time a function when the `perf_stats` feature is enabled.
///
/// The function body is wrapped with a guard that logs the elapsed time on
/// exit through `tracing::info!`. With the feature disabled the guard is
/// compiled out entirely and the function is left untouched.
///
/// # Features
/// - Auto-detects the first slice parameter (`&[T]` or `&mut [T]`) and reports
///   its length alongside the timing, which is what batch kernels care about
/// - Logs only when the duration exceeds the threshold (default 1ms)
///
/// # Example
/// ```ignore
/// #[profile]
/// pub fn update_batch<T: SodValue>(states: &mut [SodState<T>], curve: &SodCurve, dt: FixedNum) {
///     // ... work ...
/// }
/// ```
///
/// # Optional Parameters
/// ```ignore
/// #[profile(4)]  // Custom threshold in milliseconds
/// pub fn expensive_function() { ... }
/// ```
#[proc_macro_attribute]
pub fn profile(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Parse optional threshold parameter
    let threshold_ms: u128 = if attr.is_empty() {
        1
    } else {
        attr.to_string().parse().unwrap_or(1)
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let fn_name_str = sig.ident.to_string();

    // First parameter whose type is a reference to a slice
    let slice_param = sig.inputs.iter().find_map(|arg| {
        let FnArg::Typed(pat_type) = arg else {
            return None;
        };
        let Pat::Ident(pat_ident) = &*pat_type.pat else {
            return None;
        };
        match &*pat_type.ty {
            Type::Reference(reference) if matches!(&*reference.elem, Type::Slice(_)) => {
                Some(pat_ident.ident.clone())
            }
            _ => None,
        }
    });

    let profile_guard_def = if let Some(slice_ident) = slice_param {
        quote! {
            struct ProfileGuard {
                name: &'static str,
                start: std::time::Instant,
                items: usize,
            }
            impl Drop for ProfileGuard {
                fn drop(&mut self) {
                    let elapsed = self.start.elapsed();
                    if elapsed.as_millis() >= #threshold_ms {
                        ::tracing::info!("[PERF] {}: {:?} | Items: {}", self.name, elapsed, self.items);
                    }
                }
            }
            ProfileGuard {
                name: #fn_name_str,
                start: std::time::Instant::now(),
                items: #slice_ident.len(),
            }
        }
    } else {
        quote! {
            struct ProfileGuard {
                name: &'static str,
                start: std::time::Instant,
            }
            impl Drop for ProfileGuard {
                fn drop(&mut self) {
                    let elapsed = self.start.elapsed();
                    if elapsed.as_millis() >= #threshold_ms {
                        ::tracing::info!("[PERF] {}: {:?}", self.name, elapsed);
                    }
                }
            }
            ProfileGuard {
                name: #fn_name_str,
                start: std::time::Instant::now(),
            }
        }
    };

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            #[cfg(feature = "perf_stats")]
            let _profile_timer = {
                #profile_guard_def
            };

            #block
        }
    };

    output.into()
}
