use std::collections::HashMap;

use objgen_core::ReservedSymbols;
use objgen_core::lang::primitives::{self, PrimitiveId};
use objgen_core::lang::reserved::C_STANDARD_SYMBOLS;
use objgen_core::naming;

#[test]
fn primitive_spellings_unique_and_resolvable() {
    let mut canonical: HashMap<&'static str, PrimitiveId> = HashMap::new();
    let mut native: HashMap<&'static str, PrimitiveId> = HashMap::new();

    for (idx, info) in primitives::PRIMITIVES.iter().enumerate() {
        assert_eq!(info.id as usize, idx, "registry order drifted at {:?}", info.id);
        assert_eq!(primitives::from_str(info.canonical), Some(info.id));
        if let Some(prev) = canonical.insert(info.canonical, info.id) {
            panic!("duplicate canonical spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
        if let Some(prev) = native.insert(info.native, info.id) {
            panic!("duplicate native spelling {:?}: {:?} and {:?}", info.native, prev, info.id);
        }
    }
}

#[test]
fn only_void_lacks_a_selector_keyword() {
    for info in primitives::PRIMITIVES {
        assert_eq!(info.keyword.is_none(), info.id == PrimitiveId::Void, "{:?}", info.id);
    }
}

#[test]
fn builtin_deny_list_has_no_duplicates() {
    let reserved = ReservedSymbols::c_standard();
    assert_eq!(reserved.len(), C_STANDARD_SYMBOLS.len());
}

#[test]
fn renamed_enum_accessors_never_collide_again() {
    let reserved = ReservedSymbols::c_standard();
    for symbol in C_STANDARD_SYMBOLS {
        let emitted = naming::enum_accessor_name(symbol, &reserved);
        assert_ne!(emitted, *symbol);
        assert!(!reserved.contains(&emitted), "{emitted} is itself reserved");
    }
}
