use proptest::prelude::*;

use ia::catalog::Category;
use ia::ledger::SkillLedger;
use ia::test_utils::test_today;

#[derive(Debug, Clone, Copy)]
enum Toggle {
    Category(Category),
    All,
    Elearning,
}

fn arb_toggle() -> impl Strategy<Value = Toggle> {
    prop_oneof![
        Just(Toggle::Category(Category::Cw)),
        Just(Toggle::Category(Category::Kd)),
        Just(Toggle::Category(Category::Ow)),
        Just(Toggle::All),
        Just(Toggle::Elearning),
    ]
}

fn apply(ledger: &mut SkillLedger, toggle: Toggle) {
    match toggle {
        Toggle::Category(category) => {
            ledger.toggle_category(category);
        }
        Toggle::All => {
            ledger.toggle_all();
        }
        Toggle::Elearning => {
            ledger.toggle_elearning();
        }
    }
}

proptest! {
    #[test]
    fn toggling_a_category_twice_is_identity(
        history in prop::collection::vec(arb_toggle(), 0..12),
        category in prop_oneof![Just(Category::Cw), Just(Category::Ow)],
    ) {
        let mut ledger = SkillLedger::new(test_today());
        for toggle in history {
            apply(&mut ledger, toggle);
        }
        let before = ledger.clone();
        ledger.toggle_category(category);
        ledger.toggle_category(category);
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn toggles_never_touch_values(history in prop::collection::vec(arb_toggle(), 0..12)) {
        let mut ledger = SkillLedger::new(test_today());
        let values: Vec<_> = ledger.slots().map(|slot| slot.value.clone()).collect();
        for toggle in history {
            apply(&mut ledger, toggle);
        }
        let after: Vec<_> = ledger.slots().map(|slot| slot.value.clone()).collect();
        prop_assert_eq!(after, values);
    }
}
