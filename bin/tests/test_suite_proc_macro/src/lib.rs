use quote::{format_ident, quote};

/// Expands to one `#[test]` per `.lox` file under `tests/cases`, each calling
/// `lox_expect` with the file's path.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let cases_dir = format!("{}/../cases", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(&cases_dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("lox".as_ref()))
        .map(|entry| {
            let case_path = entry.path().to_string_lossy().to_string();
            let relative_path = entry.path().strip_prefix(&cases_dir).unwrap().to_string_lossy();
            let test_ident = format_ident!(
                "case_{}",
                relative_path.trim_end_matches(".lox").replace(['/', '\\', '-'], "_")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    lox_expect(#case_path);
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
