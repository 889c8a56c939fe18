use std::collections::HashSet;

use proptest::prelude::*;

use ia::catalog::SkillCode;
use ia::fields::FieldMapper;

fn arb_code() -> impl Strategy<Value = SkillCode> {
    (0u8..28).prop_map(|value| SkillCode::new(value).unwrap())
}

proptest! {
    #[test]
    fn fields_for_is_non_empty(code in arb_code()) {
        prop_assert!(!FieldMapper.fields_for(code).ids().is_empty());
    }

    #[test]
    fn distinct_codes_never_share_fields(a in arb_code(), b in arb_code()) {
        prop_assume!(a != b);
        let left: HashSet<_> = FieldMapper.fields_for(a).ids().into_iter().collect();
        let right: HashSet<_> = FieldMapper.fields_for(b).ids().into_iter().collect();
        prop_assert!(left.is_disjoint(&right), "{a} and {b} overlap");
    }
}
