use cstudio_licensing::catalog::standard_catalog;
use cstudio_licensing::engine::{defaults_for_type, select_type, toggle_option};
use cstudio_licensing::*;
use proptest::collection::vec;
use proptest::prelude::*;

const TOGGLEABLE: [&str; 3] = ["NC", "ND", "SA"];

fn no_conflicts(catalog: &LicenseCatalog, state: &SelectionState) -> bool {
    let clashes = |option: &OptionDescriptor| {
        option.conflicts_with.iter().any(|other| state.is_truthy(other))
    };
    catalog.get(&state.license_type).is_none_or(|license| {
        license.options.iter().all(|(id, option)| !state.is_truthy(id) || !clashes(option))
    })
}

fn walk(catalog: &LicenseCatalog, clicks: &[usize]) -> SelectionState {
    clicks.iter().fold(select_type(catalog, "creative-commons"), |state, &i| {
        toggle_option(catalog, &state, TOGGLEABLE[i]).unwrap().into_state()
    })
}

proptest! {
    #[test]
    fn committed_states_never_violate_conflicts(clicks in vec(0..3usize, 0..64)) {
        let catalog = standard_catalog();
        let state = walk(&catalog, &clicks);
        prop_assert!(no_conflicts(&catalog, &state));

        let license = catalog.get("creative-commons").unwrap();
        let declared: Vec<&String> = license.options.keys().collect();
        let present: Vec<&String> = state.options.keys().collect();
        prop_assert_eq!(declared, present);
    }

    #[test]
    fn toggling_twice_restores_the_option(clicks in vec(0..3usize, 0..32), pick in 0..3usize) {
        let catalog = standard_catalog();
        let state = walk(&catalog, &clicks);
        let option = TOGGLEABLE[pick];

        let once = toggle_option(&catalog, &state, option).unwrap();
        if once.is_applied() {
            let twice = toggle_option(&catalog, once.state(), option).unwrap();
            prop_assert!(twice.is_applied());
            prop_assert_eq!(twice.state(), &state);
        } else {
            prop_assert_eq!(once.state(), &state);
        }
    }

    #[test]
    fn select_type_ignores_prior_state(
        clicks in vec(0..3usize, 0..32),
        custom in "[a-z][a-z-]{0,16}",
    ) {
        let catalog = standard_catalog();
        let _prior = walk(&catalog, &clicks);

        for type_id in ["creative-commons", "all-rights-reserved", custom.as_str()] {
            let defaults = defaults_for_type(&catalog, type_id);
            prop_assert_eq!(select_type(&catalog, type_id).options, defaults);
        }
    }
}
