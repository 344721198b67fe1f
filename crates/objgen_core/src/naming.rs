//! Pure, deterministic naming helpers for emitted native symbols.
//!
//! Every name the emitter writes is derived here from the object-language name plus the type's native prefix, so
//! tests and tooling can predict output spellings without rendering a unit.
//!
//! ## Examples
//! ```rust
//! use objgen_core::naming;
//! use objgen_core::ReservedSymbols;
//!
//! let reserved = ReservedSymbols::c_standard();
//! assert_eq!(naming::enum_accessor_name("EOF", &reserved), "EOF_");
//! assert_eq!(naming::enum_accessor_name("ONE", &reserved), "ONE");
//! assert_eq!(naming::static_symbol("Test", "ID"), "Test_ID");
//! ```

use std::borrow::Cow;

use crate::ReservedSymbols;

/// Uppercase the first character, leaving the rest untouched (`iD` → `ID`, `value` → `Value`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Native storage symbol for a static field or a materialized constant: `<Type>_<field>`.
pub fn static_symbol(native_type: &str, field: &str) -> String {
    format!("{native_type}_{field}")
}

/// Backing instance variable for a field: `<field>_`.
pub fn ivar_name(field: &str) -> String {
    format!("{field}_")
}

/// Class-method getter name for a static field (the field name, verbatim).
pub fn getter_name(field: &str) -> &str {
    field
}

/// Class-method setter selector for a static field: `set<Field>`.
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize(field))
}

/// Annotation metadata accessor name: `__annotations_<field>_`.
pub fn annotations_accessor_name(field: &str) -> String {
    format!("__annotations_{field}_")
}

/// Emitted class-method name for an enum constant.
///
/// A trailing underscore is appended iff `logical_name` collides exactly with a reserved symbol. The logical name
/// used for the singleton-table lookup is never changed by this function's callers.
pub fn enum_accessor_name<'a>(logical_name: &'a str, reserved: &ReservedSymbols) -> Cow<'a, str> {
    if reserved.contains(logical_name) {
        Cow::Owned(format!("{logical_name}_"))
    } else {
        Cow::Borrowed(logical_name)
    }
}

/// Build an Objective-C selector from a base name and the selector keywords of its parameters.
///
/// `("init", ["Int", "NSString"])` → `initWithInt:withNSString:`; no parameters → the base name alone.
pub fn selector<S: AsRef<str>>(base: &str, keywords: &[S]) -> String {
    let mut out = base.to_string();
    for (idx, keyword) in keywords.iter().enumerate() {
        let joiner = if idx == 0 { "With" } else { "with" };
        out.push_str(joiner);
        out.push_str(keyword.as_ref());
        out.push(':');
    }
    out
}

/// C function name implementing a selector on a type: `Test_initWithInt_`.
pub fn function_name(native_type: &str, selector: &str) -> String {
    format!("{native_type}_{}", selector.replace(':', "_"))
}
