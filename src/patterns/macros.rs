/// Macro to register patterns in the registry with generated dispatch functions
///
/// Usage in patterns/mod.rs:
/// ```ignore
/// register_patterns! {
///     triangle => {
///         renderer: TriangleRenderer,
///         id: "triangle",
///         name: "Right triangle",
///         description: "Rows of stars"
///     },
/// }
/// ```
#[macro_export]
macro_rules! register_patterns {
    (
        $(
            $module:ident => {
                renderer: $renderer:ident,
                id: $id:expr,
                name: $name:expr,
                description: $desc:expr
            }
        ),* $(,)?
    ) => {
        /// Get all available patterns with their metadata and entry points
        pub fn get_all_patterns() -> Vec<PatternEntry> {
            vec![
                $(
                    PatternEntry {
                        info: PatternInfo {
                            id: $id,
                            name: $name,
                            description: $desc,
                        },
                        render: |size, opts, ctx| {
                            use $crate::core::renderer::PatternRenderer;
                            use $crate::patterns::$module::$renderer;
                            <$renderer as PatternRenderer>::render(size, opts, ctx)
                        },
                        document: |size, opts| {
                            use $crate::core::renderer::PatternRenderer;
                            use $crate::patterns::$module::$renderer;
                            <$renderer as PatternRenderer>::document(size, opts)
                        },
                    }
                ),*
            ]
        }

        /// Get a pattern by ID
        pub fn get_pattern(id: &str) -> Option<PatternEntry> {
            get_all_patterns().into_iter().find(|p| p.info.id == id)
        }
    };
}
