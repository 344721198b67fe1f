//! Spellings of the runtime-support library the emitter targets.
//!
//! These names are a stable ABI owned by the runtime library. The emitter must never reimplement the behavior behind
//! them (singleton lookup, ownership transfer, array construction); it only writes calls to them.

/// Umbrella header every implementation unit includes first.
pub const SOURCE_HEADER: &str = "J2ObjC_source.h";

/// Sentinel opening a region where "designated initializer" diagnostics are suppressed.
pub const IGNORE_DESIGNATED_BEGIN: &str = "J2OBJC_IGNORE_DESIGNATED_BEGIN";

/// Sentinel closing the region opened by [`IGNORE_DESIGNATED_BEGIN`].
pub const IGNORE_DESIGNATED_END: &str = "J2OBJC_IGNORE_DESIGNATED_END";

/// Fixed-length object array class.
pub const OBJECT_ARRAY: &str = "IOSObjectArray";

/// Element class of annotation arrays returned by annotation metadata accessors.
pub const ANNOTATION_ELEMENT_TYPE: &str = "JavaLangAnnotationAnnotation";

/// Fallback element class for nested annotation array members.
pub const OBJECT_ELEMENT_TYPE: &str = "NSObject";

/// Qualified name of the property-mapping annotation.
pub const PROPERTY_ANNOTATION: &str = "com.google.j2objc.annotations.Property";

/// Ownership-transferring assignment: `JreStrongAssign(&slot, value);`.
pub fn strong_assign(slot: &str, value: &str) -> String {
    format!("JreStrongAssign(&{slot}, {value});")
}

/// Singleton-table lookup for an enum constant: `JreEnum(Type, NAME)`.
pub fn enum_lookup(native_type: &str, logical_name: &str) -> String {
    format!("JreEnum({native_type}, {logical_name})")
}

/// Live load of a static field: `JreLoadStatic(Type, name)`.
pub fn load_static(native_type: &str, field: &str) -> String {
    format!("JreLoadStatic({native_type}, {field})")
}

/// Class object accessor: `Type_class_()`.
pub fn class_literal(native_type: &str) -> String {
    format!("{native_type}_class_()")
}

/// Class initialization guard called at the top of static functions: `Type_initialize();`.
pub fn initialize_call(native_type: &str) -> String {
    format!("{native_type}_initialize();")
}

/// Fixed-length object array literal.
pub fn object_array(elements: &[String], element_type: &str) -> String {
    format!(
        "[{OBJECT_ARRAY} arrayWithObjects:(id[]) {{ {} }} count:{} type:{}]",
        elements.join(", "),
        elements.len(),
        class_literal(element_type)
    )
}

/// Autoreleased instance built with the given initializer message (`init`, `initWithValue:@"x"`).
pub fn autoreleased_instance(native_type: &str, init_message: &str) -> String {
    format!("[[[{native_type} alloc] {init_message}] autorelease]")
}
