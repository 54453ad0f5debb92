//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_inspector::rule;
//!
//! // Unit rule over any JSON value
//! rule! {
//!     pub IsArray;
//!     test(value) { value.is_array() }
//!     fn is_array();
//! }
//!
//! // Unit rule over the textual form of the value
//! rule! {
//!     pub Shouting for text;
//!     test(input) { input.chars().all(|c| !c.is_lowercase()) }
//!     fn shouting();
//! }
//!
//! // Struct with fields, over text
//! rule! {
//!     pub Prefixed { prefix: String } for text;
//!     test(self, input) { input.starts_with(&self.prefix) }
//!     new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
//!     fn prefixed(prefix: impl Into<String>);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`] implementation,
/// and optionally a constructor and factory function.
///
/// Rules declared `for text` receive the value's textual form as `&str`
/// (see [`as_text`]) and fail for values that have none. Rules without the
/// `for text` marker receive the raw `&serde_json::Value`.
///
/// [`Rule`]: crate::foundation::Rule
/// [`as_text`]: crate::foundation::as_text
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule over text + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for text;
        test($inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name for text;
            test($inp) $body
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule over text, no factory ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for text;
        test($inp:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn test(&self, value: &::serde_json::Value) -> bool {
                match $crate::foundation::as_text(value) {
                    Some(text) => {
                        let $inp: &str = &text;
                        $body
                    }
                    None => false,
                }
            }
        }
    };

    // ── Variant 2a: Unit rule over the raw value + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        test($inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            test($inp) $body
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2b: Unit rule over the raw value, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        test($inp:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn test(&self, $inp: &::serde_json::Value) -> bool $body
        }
    };

    // ── Variant 3: Struct with fields over text + custom new + factory ──
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for text;
        test($self_:ident, $inp:ident) $body:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn test(&$self_, value: &::serde_json::Value) -> bool {
                match $crate::foundation::as_text(value) {
                    Some(text) => {
                        let $inp: &str = &text;
                        $body
                    }
                    None => false,
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4: Struct with fields over the raw value + custom new ───
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        test($self_:ident, $inp:ident) $body:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn test(&$self_, $inp: &::serde_json::Value) -> bool $body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
