//! Property-based tests for option merging, on owned instances so the
//! shared configuration stays untouched.

use proptest::prelude::*;
use sift_search::{Configuration, CustomArrows, Options};

// ============================================================================
// Strategies
// ============================================================================

fn glyph_strategy() -> impl Strategy<Value = String> {
    // Arrows in the wild range from entities to inline markup.
    "[a-zA-Z0-9<>/#&;\"= -]{1,24}"
}

fn arrows_strategy() -> impl Strategy<Value = CustomArrows> {
    (
        proptest::option::of(glyph_strategy()),
        proptest::option::of(glyph_strategy()),
    )
        .prop_map(|(up, down)| {
            let mut arrows = CustomArrows::new();
            if let Some(up) = up {
                arrows = arrows.up(up);
            }
            if let Some(down) = down {
                arrows = arrows.down(down);
            }
            arrows
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// An override without a key never disturbs that key, whatever state
    /// earlier overrides left behind.
    #[test]
    fn absent_keys_are_never_disturbed(
        overrides in prop::collection::vec(arrows_strategy(), 0..10),
    ) {
        let mut options = Options::new();
        for arrows in overrides {
            let up_before = options.up_arrow.clone();
            let down_before = options.down_arrow.clone();
            let expects_up = arrows.up_arrow.clone();
            let expects_down = arrows.down_arrow.clone();

            options.apply_arrows(arrows);

            match expects_up {
                Some(up) => prop_assert_eq!(&options.up_arrow, &up),
                None => prop_assert_eq!(&options.up_arrow, &up_before),
            }
            match expects_down {
                Some(down) => prop_assert_eq!(&options.down_arrow, &down),
                None => prop_assert_eq!(&options.down_arrow, &down_before),
            }
        }
    }

    /// A sequence of partial overrides is equivalent to the last full value
    /// seen per key.
    #[test]
    fn merge_keeps_latest_value_per_key(
        overrides in prop::collection::vec(arrows_strategy(), 1..10),
    ) {
        let mut options = Options::new();
        for arrows in overrides.clone() {
            options.apply_arrows(arrows);
        }

        let last_up = overrides.iter().rev().find_map(|a| a.up_arrow.clone());
        let last_down = overrides.iter().rev().find_map(|a| a.down_arrow.clone());

        prop_assert_eq!(
            options.up_arrow,
            last_up.unwrap_or_else(|| Options::new().up_arrow)
        );
        prop_assert_eq!(
            options.down_arrow,
            last_down.unwrap_or_else(|| Options::new().down_arrow)
        );
    }

    /// Snapshot, mutate arbitrarily, restore: options return to the
    /// pre-mutation state.
    #[test]
    fn snapshot_restore_round_trips(
        key in "[a-z_]{1,12}",
        value in "[a-zA-Z0-9 ]{0,12}",
        arrows in arrows_strategy(),
    ) {
        let mut config = Configuration::new();
        config.set_option("pre_existing", "kept");

        let snapshot = config.options_snapshot();

        config.set_search_key("mutated");
        config.set_option(key, value);
        config.custom_arrows(arrows);

        config.restore_options(snapshot.clone());
        prop_assert_eq!(config.options(), &snapshot);
    }
}
