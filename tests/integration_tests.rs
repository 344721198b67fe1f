//! Integration tests for unit emission through the public API

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use objgen::cli::{EmitOptions, ExitCode, commands};
use objgen::model::{
    AnnotationBinding, AnnotationTypeRef, ConstantExpr, ConstructorModel, FieldModel, MethodModel, ParameterModel,
    PrimitiveType, RefContext, Retention, StatementModel, TypeKind, TypeModel, TypeRef, field_ref, parse_types, text,
};
use objgen::{Diagnostic, DiagnosticKind, EmitConfig, EmitError, ReservedSymbols, render_batch, render_unit};

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

fn render(ty: &TypeModel, config: EmitConfig) -> Result<String, EmitError> {
    render_unit(ty, &config, &ReservedSymbols::c_standard())
}

fn accessors_on() -> EmitConfig {
    EmitConfig::new().with_static_accessor_methods(true)
}

fn switch_on(field: FieldModel) -> TypeModel {
    TypeModel::new("Test", TypeKind::Class).with_field(field).with_method(
        MethodModel::new("test", TypeRef::Primitive(PrimitiveType::Void))
            .at_line(4)
            .with_body(vec![
                StatementModel::new(5, vec![text("switch (x) {")]),
                StatementModel::new(
                    6,
                    vec![text("case "), field_ref("I", RefContext::ConstantRequired), text(":")],
                ),
                StatementModel::new(7, vec![text("}")]),
            ]),
    )
}

#[test]
fn constant_in_case_label_is_inlined_for_static_and_instance_fields() {
    let base = FieldModel::new("I", int()).with_final().with_initializer(ConstantExpr::Int(1));
    for field in [base.clone(), base.with_static()] {
        let unit = render(&switch_on(field), EmitConfig::new()).unwrap();
        assert!(unit.contains("#define Test_I 1"), "{unit}");
        assert!(unit.contains("case Test_I:"), "{unit}");
        assert!(!unit.contains("JreLoadStatic"), "{unit}");
        assert!(!unit.contains("self->I_"), "{unit}");
    }
}

#[test]
fn constant_required_field_without_value_aborts_unit() {
    let field = FieldModel::new("I", int()).with_final().with_constant_required().at_line(2);
    let err = render(&switch_on(field), EmitConfig::new()).unwrap_err();
    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.kind, DiagnosticKind::MalformedModel);
    assert_eq!(diagnostic.type_name, "Test");
    assert_eq!(diagnostic.member, "I");
    assert_eq!(diagnostic.line, 2);
}

fn static_field(name: &str, is_final: bool, is_private: bool) -> FieldModel {
    let mut field = FieldModel::new(name, TypeRef::object("NSString")).with_static();
    if is_final {
        field = field.with_final();
    }
    if is_private {
        field = field.with_private();
    }
    field
}

#[test]
fn static_accessors_follow_modifiers() {
    let ty = TypeModel::new("Test", TypeKind::Class)
        .with_field(static_field("plain", false, false))
        .with_field(static_field("fixed", true, false))
        .with_field(static_field("hidden", false, true))
        .with_field(static_field("hiddenFixed", true, true));
    let unit = render(&ty, accessors_on()).unwrap();
    assert!(unit.contains("+ (NSString *)plain {"));
    assert!(unit.contains("+ (void)setPlain:(NSString *)value {\n  JreStrongAssign(&Test_plain, value);\n}"));
    assert!(unit.contains("+ (NSString *)fixed {"));
    assert!(!unit.contains("setFixed"));
    assert!(!unit.contains("+ (NSString *)hidden"));
    assert!(!unit.contains("setHidden"));

    let disabled = render(&ty, EmitConfig::new()).unwrap();
    assert!(!disabled.contains("+ ("));
}

#[test]
fn enum_accessors_rename_only_reserved_constants() {
    let ty = TypeModel::new("Test", TypeKind::Enum).with_enum_constants(["ONE", "NULL", "Two"]);
    let unit = render(&ty, accessors_on()).unwrap();
    assert!(unit.contains("+ (Test *)ONE {\n  return JreEnum(Test, ONE);\n}"));
    assert!(unit.contains("+ (Test *)NULL_ {\n  return JreEnum(Test, NULL);\n}"));
    assert!(unit.contains("+ (Test *)Two {\n  return JreEnum(Test, Two);\n}"));
}

#[test]
fn custom_deny_list_drives_renaming() {
    let ty = TypeModel::new("Test", TypeKind::Enum).with_enum_constants(["EOF", "RED"]);
    let reserved = ReservedSymbols::parse("# project reserved\nRED\n\n");
    let unit = render_unit(&ty, &accessors_on(), &reserved).unwrap();
    assert!(unit.contains("+ (Test *)EOF {"));
    assert!(unit.contains("+ (Test *)RED_ {"));
}

#[test]
fn enum_accessors_are_enum_only() {
    let ty = TypeModel::new("Test", TypeKind::Class).with_field(static_field("ONE", true, false));
    let unit = render(&ty, accessors_on()).unwrap();
    assert!(!unit.contains("JreEnum"));
}

fn deprecated(retention: Retention) -> AnnotationBinding {
    AnnotationBinding::new(
        AnnotationTypeRef::marker("java.lang.Deprecated", "JavaLangDeprecated"),
        retention,
    )
}

#[test]
fn annotation_accessor_counts_runtime_bindings_in_order() {
    let retained = AnnotationBinding::new(
        AnnotationTypeRef::marker("com.example.Retained", "ComExampleRetained"),
        Retention::Runtime,
    );
    let ty = TypeModel::new("A", TypeKind::Class)
        .with_field(
            FieldModel::new("f", int())
                .with_annotation(deprecated(Retention::Runtime))
                .with_annotation(deprecated(Retention::Source))
                .with_annotation(retained),
        )
        .with_field(FieldModel::new("g", int()).with_annotation(deprecated(Retention::Class)));
    let unit = render(&ty, EmitConfig::new()).unwrap();
    assert!(unit.contains(
        "+ (IOSObjectArray *)__annotations_f_ {\n  return [IOSObjectArray arrayWithObjects:(id[]) { \
         [[[JavaLangDeprecated alloc] init] autorelease], [[[ComExampleRetained alloc] init] autorelease] } \
         count:2 type:JavaLangAnnotationAnnotation_class_()];\n}"
    ));
    assert!(!unit.contains("__annotations_g_"));
}

#[test]
fn annotation_accessor_shape_is_kind_independent() {
    let field = FieldModel::new("I", int())
        .with_static()
        .with_final()
        .with_initializer(ConstantExpr::Int(1))
        .with_annotation(deprecated(Retention::Runtime));
    let class = TypeModel::new("A", TypeKind::Class).with_field(field.clone());
    let interface = TypeModel::new("A", TypeKind::Interface).with_field(field);
    assert_eq!(
        render(&class, EmitConfig::new()).unwrap(),
        render(&interface, EmitConfig::new()).unwrap()
    );
}

#[test]
fn property_binding_is_opt_in() {
    let property = AnnotationBinding::new(
        AnnotationTypeRef::marker("com.google.j2objc.annotations.Property", "ComGoogleJ2objcAnnotationsProperty"),
        Retention::Source,
    );
    let ty = TypeModel::new("Test", TypeKind::Class)
        .with_field(FieldModel::new("foo", TypeRef::object("NSString")).with_annotation(property))
        .with_field(FieldModel::new("bar", TypeRef::object("NSString")));
    let unit = render(&ty, EmitConfig::new()).unwrap();
    assert_eq!(unit.matches("@synthesize").count(), 1);
    assert!(unit.contains("@synthesize foo = foo_;"));
}

#[test]
fn static_property_field_does_not_abort_unit() {
    let property = AnnotationBinding::new(
        AnnotationTypeRef::marker("com.google.j2objc.annotations.Property", "ComGoogleJ2objcAnnotationsProperty"),
        Retention::Source,
    );
    let ty = TypeModel::new("Test", TypeKind::Class)
        .with_field(
            FieldModel::new("foo", TypeRef::object("NSString"))
                .with_static()
                .with_annotation(property.clone()),
        )
        .with_field(FieldModel::new("bar", TypeRef::object("NSString")).with_annotation(property));
    let unit = render(&ty, EmitConfig::new()).unwrap();
    assert!(unit.contains("@synthesize bar = bar_;"));
    assert!(!unit.contains("@synthesize foo"));
    assert!(unit.contains("NSString *Test_foo;"));
}

#[test]
fn interface_annotation_accessor_matches_runtime_layout() {
    let field = FieldModel::new("I", int())
        .with_static()
        .with_final()
        .with_initializer(ConstantExpr::Int(5))
        .with_annotation(deprecated(Retention::Runtime));
    let unit = render(&TypeModel::new("A", TypeKind::Interface).with_field(field), EmitConfig::new()).unwrap();
    assert!(unit.contains(
        "+ (IOSObjectArray *)__annotations_I_ {\n  return [IOSObjectArray arrayWithObjects:(id[]) { \
         [[[JavaLangDeprecated alloc] init] autorelease] } count:1 type:JavaLangAnnotationAnnotation_class_()];\n}\n"
    ));
}

#[test]
fn three_constructors_yield_one_designated_and_two_wrappers() {
    let ty = TypeModel::new("Test", TypeKind::Class)
        .with_constructor(ConstructorModel::new(Vec::new()).delegating(1, vec!["0".to_string()]))
        .with_constructor(ConstructorModel::new(vec![ParameterModel::new("i", int())]).designated())
        .with_constructor(
            ConstructorModel::new(vec![ParameterModel::new("s", TypeRef::object("NSString"))])
                .delegating(1, vec!["[s length]".to_string()]),
        );
    let unit = render(&ty, EmitConfig::new()).unwrap();
    assert_eq!(unit.matches("J2OBJC_IGNORE_DESIGNATED_BEGIN").count(), 1);
    assert_eq!(unit.matches("J2OBJC_IGNORE_DESIGNATED_END").count(), 1);
    assert_eq!(unit.matches("- (instancetype)").count(), 3);
    // Designated first, then delegates in declaration order.
    let designated = unit.find("- (instancetype)initWithInt:").unwrap();
    let bare = unit.find("- (instancetype)init {").unwrap();
    let string = unit.find("- (instancetype)initWithNSString:").unwrap();
    assert!(designated < bare && bare < string);
    assert!(unit.contains("  Test_initWithInt_(self, [s length]);\n"));
}

#[test]
fn zero_constructors_emit_no_initializers() {
    let unit = render(&TypeModel::new("Test", TypeKind::Class), EmitConfig::new()).unwrap();
    assert!(!unit.contains("instancetype"));
    assert!(!unit.contains("J2OBJC_IGNORE_DESIGNATED"));
}

#[test]
fn ambiguous_designated_initializer_is_an_error() {
    let ty = TypeModel::new("Test", TypeKind::Class)
        .with_constructor(ConstructorModel::new(Vec::new()).designated())
        .with_constructor(ConstructorModel::new(vec![ParameterModel::new("i", int())]).designated());
    let err = render(&ty, EmitConfig::new()).unwrap_err();
    assert_eq!(err.kind(), DiagnosticKind::AmbiguousDesignatedInitializer);
    assert_eq!(err.diagnostic().member, "initWithInt:");
}

#[test]
fn sections_appear_in_fixed_order() {
    let property = AnnotationBinding::new(
        AnnotationTypeRef::marker("com.google.j2objc.annotations.Property", "ComGoogleJ2objcAnnotationsProperty"),
        Retention::Runtime,
    );
    let ty = TypeModel::new("Test", TypeKind::Enum)
        .with_enum_constants(["ONE"])
        .with_field(static_field("name", false, false))
        .with_field(FieldModel::new("foo", int()).with_annotation(property))
        .with_constructor(ConstructorModel::new(Vec::new()).designated())
        .with_method(MethodModel::new("size", int()));
    let unit = render(&ty, accessors_on()).unwrap();
    let markers = [
        "NSString *Test_name;",
        "@implementation Test",
        "+ (NSString *)name {",
        "+ (Test *)ONE {",
        "+ (IOSObjectArray *)__annotations_foo_ {",
        "@synthesize foo = foo_;",
        "void Test_init(Test *self) {",
        "- (jint)size {",
        "@end",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|m| unit.find(m).unwrap_or_else(|| panic!("missing {m} in\n{unit}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{unit}");
}

#[test]
fn line_markers_precede_changed_statements() {
    let ty = switch_on(FieldModel::new("I", int()).with_final().with_initializer(ConstantExpr::Int(1)).at_line(2));
    let unit = render(&ty, EmitConfig::new().with_line_directives(true)).unwrap();
    assert!(unit.contains("#line 2\n#define Test_I 1\n"));
    assert!(unit.contains(
        "#line 4\n- (void)test {\n#line 5\n  switch (x) {\n#line 6\n  case Test_I:\n#line 7\n  }\n}\n"
    ));
}

#[test]
fn batch_isolates_failures_and_keeps_order() {
    let good = TypeModel::new("Good", TypeKind::Class);
    let bad = TypeModel::new("Bad", TypeKind::Class).with_constructor(ConstructorModel::new(Vec::new()));
    let also_good = TypeModel::new("AlsoGood", TypeKind::Enum).with_enum_constants(["A"]);
    let types = vec![good, bad, also_good];

    let outputs = render_batch(
        &types,
        &EmitConfig::new(),
        &ReservedSymbols::c_standard(),
        NonZeroUsize::new(3).unwrap(),
    );
    let names: Vec<_> = outputs.iter().map(|o| o.type_name.as_str()).collect();
    assert_eq!(names, vec!["Good", "Bad", "AlsoGood"]);
    assert!(outputs[0].is_ok());
    assert!(!outputs[1].is_ok());
    assert!(outputs[2].is_ok());

    let mut sink: Vec<Diagnostic> = Vec::new();
    assert_eq!(objgen::backend::report_diagnostics(&outputs, &mut sink), 1);
    assert_eq!(sink[0].type_name, "Bad");
}

#[test]
fn json_model_round_trip() {
    let json = fs::read_to_string("tests/emit_snapshots/constructors_and_methods.json").unwrap();
    let types = parse_types(&json).unwrap();
    let reserialized = serde_json::to_string(&types).unwrap();
    assert_eq!(parse_types(&reserialized).unwrap(), types);
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("objgen_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn options() -> EmitOptions {
    EmitOptions {
        emit_line_directives: false,
        static_accessor_methods: false,
        reserved_symbols: None,
        jobs: NonZeroUsize::new(2).unwrap(),
    }
}

#[test]
fn emit_command_writes_successful_units_only() {
    let dir = scratch_dir("emit");
    let model = dir.join("model.json");
    fs::write(
        &model,
        r#"[
            {"name": "Good", "native_name": "ComExampleGood", "kind": "class"},
            {"name": "Bad", "native_name": "ComExampleBad", "kind": "class",
             "constructors": [{"parameters": []}]}
        ]"#,
    )
    .unwrap();
    let out = dir.join("out");

    let code = commands::emit(&model, &out, &options()).unwrap();
    assert_eq!(code, ExitCode::FAILURE);
    let written = fs::read_to_string(out.join("ComExampleGood.m")).unwrap();
    assert!(written.starts_with("#include \"J2ObjC_source.h\"\n#include \"ComExampleGood.h\"\n"));
    assert!(!out.join("ComExampleBad.m").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn check_command_reports_missing_model() {
    let err = commands::check(&PathBuf::from("tests/emit_snapshots/missing.json"), &options()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
}
