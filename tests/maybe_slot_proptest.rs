use maybeslot::MaybeSlot;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Reset,
    ResetTo(u16),
    ResetDefault,
    Emplace(u16),
    CloneFrom(Option<u16>),
    MutateAdd(u16),
}

proptest! {
    #[test]
    fn test_slot_matches_option_model(ops in proptest::collection::vec(
        prop_oneof![
            Just(Operation::Reset),
            any::<u16>().prop_map(Operation::ResetTo),
            Just(Operation::ResetDefault),
            any::<u16>().prop_map(Operation::Emplace),
            proptest::option::of(any::<u16>()).prop_map(Operation::CloneFrom),
            any::<u16>().prop_map(Operation::MutateAdd),
        ],
        1..64
    )) {
        let mut model: Option<u16> = None;
        let mut slot: MaybeSlot<u16> = MaybeSlot::new();

        for op in ops {
            match op {
                Operation::Reset => {
                    model = None;
                    slot.reset();
                }
                Operation::ResetTo(v) => {
                    model = Some(v);
                    slot.reset_to(v);
                }
                Operation::ResetDefault => {
                    model = Some(u16::default());
                    slot.reset_default();
                }
                Operation::Emplace(v) => {
                    model = Some(v);
                    slot.emplace_with(|| v);
                }
                Operation::CloneFrom(src) => {
                    let source = match src {
                        Some(v) => MaybeSlot::of(v),
                        None => MaybeSlot::empty(),
                    };
                    slot.clone_from(&source);
                    model = src;
                }
                Operation::MutateAdd(delta) => {
                    if let Some(m) = model.as_mut() {
                        *m = m.wrapping_add(delta);
                    }
                    if let Some(v) = slot.get_mut() {
                        *v = v.wrapping_add(delta);
                    }
                }
            }

            // Observable state must match the model after every step.
            prop_assert_eq!(slot.get(), model.as_ref());
            prop_assert_eq!(slot.is_engaged(), model.is_some());
            prop_assert_eq!(slot.is_empty(), model.is_none());
        }

        // A fresh clone observes the same final state as its source.
        let copied = slot.clone();
        prop_assert_eq!(copied.get(), model.as_ref());
    }

    #[test]
    fn test_clone_round_trips_value(value in any::<u16>()) {
        let original = MaybeSlot::of(value);
        let copied = original.clone();
        prop_assert_eq!(copied.get(), Some(&value));
        prop_assert_eq!(original.get(), Some(&value));
    }
}
