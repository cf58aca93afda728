use crate::caf::caf_existence;
use crate::enumeration::all_rafs;
use crate::io::read_network;
use crate::model::{ReactionNetwork, ReactionSet};
use crate::persistent::{
    GreedyRemovalState, PersistentPoly, persistent_exact, persistent_leave_one_out,
    persistent_poly,
};
use crate::raf::{RafConfig, is_raf, max_raf, strict_max_raf};
use crate::test_utils::arbitrary::arb_network;
use crate::test_utils::example_networks::*;
use crate::test_utils::{init_logger, mk_subset};
use cancel_this::Cancellable;
use computation_process::Algorithm;
use proptest::prelude::*;
use test_generator::test_resources;

/// Run all three procedures and check that they agree.
fn persistent(network: &ReactionNetwork) -> Cancellable<ReactionSet> {
    let exact = persistent_exact(&network.reactions, &network.food_set)?;
    let leave_one_out = persistent_leave_one_out(&network.reactions, &network.food_set)?;
    let poly = persistent_poly(&network.reactions, &network.food_set)?;
    assert_eq!(exact, leave_one_out, "Leave-one-out differs from exact.");
    assert_eq!(exact, poly, "Greedy removal differs from exact.");
    Ok(exact)
}

#[test]
fn test_persistent_without_raf() -> Cancellable<()> {
    init_logger();
    assert!(persistent(&no_raf())?.is_empty());
    Ok(())
}

#[test]
fn test_persistent_single_raf() -> Cancellable<()> {
    init_logger();
    for network in [trivial_caf(), cycle_of_four()] {
        assert_eq!(persistent(&network)?, network.reactions);
    }

    let network = example_0();
    assert_eq!(persistent(&network)?, mk_subset(&network, &["r1", "r2", "r3"]));

    let network = example_9();
    assert_eq!(
        persistent(&network)?,
        mk_subset(&network, &["r1", "r2", "r3", "r4"])
    );
    Ok(())
}

#[test]
fn test_persistent_redundant_pathways() -> Cancellable<()> {
    init_logger();
    assert!(persistent(&disjoint_pathways())?.is_empty());
    assert!(persistent(&example_1())?.is_empty());
    assert!(persistent(&custom_0())?.is_empty());
    Ok(())
}

#[test]
fn test_persistent_custom() -> Cancellable<()> {
    init_logger();
    let network = custom_1();
    assert_eq!(persistent(&network)?, mk_subset(&network, &["r2"]));

    let network = custom_2();
    assert_eq!(persistent(&network)?, mk_subset(&network, &["r3"]));
    Ok(())
}

#[test]
fn test_persistent_poly_passes() -> Cancellable<()> {
    init_logger();
    let network = custom_2();
    let result = PersistentPoly::run(&network, &network)?;
    assert_eq!(result.labels(), vec!["r3"]);

    // The initial RAF check and one removal pass are not enough to finish.
    let mut config = RafConfig::from(&network);
    config.max_iterations = 1;
    assert!(PersistentPoly::run(config, GreedyRemovalState::from(&network)).is_err());
    Ok(())
}

/// Networks above this size are not enumerated exhaustively.
const ENUMERATION_LIMIT: usize = 10;

fn test_model_consistency_impl(model_path: &str) -> Cancellable<()> {
    init_logger();
    let network = read_network(model_path).unwrap();
    let reactions = &network.reactions;
    let food = &network.food_set;

    let max = max_raf(reactions, food)?;
    let strict = strict_max_raf(reactions, food)?;
    assert!(max.is_subset(reactions));
    assert!(strict.is_subset(&max));
    assert_eq!(is_raf(&max, food)?, !max.is_empty());
    if caf_existence(&network) {
        assert!(!max.is_empty());
    }

    let poly = persistent_poly(reactions, food)?;
    assert_eq!(poly, persistent_leave_one_out(reactions, food)?);
    assert!(poly.is_subset(&max));

    if reactions.len() <= ENUMERATION_LIMIT {
        let rafs = all_rafs(reactions, food)?;
        assert_eq!(rafs.contains(&max), !max.is_empty());
        for raf in &rafs {
            assert!(poly.is_subset(raf));
        }
        assert_eq!(poly, persistent_exact(reactions, food)?);
    }
    Ok(())
}

/// Compare all algorithms on the shipped model files.
#[test_resources("./models/*.crs")]
fn test_model_consistency(model_path: &str) {
    test_model_consistency_impl(model_path).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_persistent_methods_agree(network in arb_network()) {
        let exact = persistent_exact(&network.reactions, &network.food_set).unwrap();
        let leave_one_out = persistent_leave_one_out(&network.reactions, &network.food_set).unwrap();
        let poly = persistent_poly(&network.reactions, &network.food_set).unwrap();
        prop_assert_eq!(&exact, &leave_one_out);
        prop_assert_eq!(&exact, &poly);
    }
}
