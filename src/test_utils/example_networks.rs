//! Small hand-built networks with known RAF structure.
//!
//! The `example_*` and `custom_*` networks are also shipped as `.crs` files in `models/`.

use crate::model::ReactionNetwork;
use crate::test_utils::mk_network;

/// `r` is constructed and catalyzed by food alone: a CAF (and a RAF) of size one.
pub fn trivial_caf() -> ReactionNetwork {
    mk_network(&["r: a+b [{c}] -> f"], &["a", "b", "c"])
}

/// The only catalyst set is empty, which never catalyzes anything.
pub fn no_raf() -> ReactionNetwork {
    mk_network(&["r1: a [{}] -> b"], &["a"])
}

/// Four reactions catalyzing each other in a cycle. The full set is the only RAF.
pub fn cycle_of_four() -> ReactionNetwork {
    mk_network(
        &[
            "r1: f [c4] -> c1",
            "r2: f [c1] -> c2",
            "r3: f [c2] -> c3",
            "r4: f [c3] -> c4",
        ],
        &["f"],
    )
}

/// Two independent self-sufficient cycles with no shared agents. Each cycle is a RAF on
/// its own, hence no reaction is persistent.
pub fn disjoint_pathways() -> ReactionNetwork {
    mk_network(
        &[
            "a1: fa [xa3] -> xa1",
            "a2: fa [xa1] -> xa2",
            "a3: fa [xa2] -> xa3",
            "b1: fb [xb3] -> xb1",
            "b2: fb [xb1] -> xb2",
            "b3: fb [xb2] -> xb3",
        ],
        &["fa", "fb"],
    )
}

/// Strict autocatalysis excludes `r3`, which is only catalyzed by food.
pub fn strict_example() -> ReactionNetwork {
    mk_network(
        &[
            "r1: a+b [{a,d}] -> e",
            "r2: b+c [{a,b},{e}] -> d",
            "r3: d [{a,b}] -> c",
        ],
        &["a", "b", "c"],
    )
}

/// Max RAF `{r1, r2, r3}`, which is also the only RAF. No CAF.
pub fn example_0() -> ReactionNetwork {
    mk_network(
        &[
            "r1: a+b [{e},{f}] -> d",
            "r2: b+c [{f}] -> e",
            "r3: e+c [{d}] -> b+f",
            "r4: c+h [{g}] -> g",
            "r5: i [{h}] -> h",
            "r6: h [{d}] -> i",
        ],
        &["a", "b", "c"],
    )
}

/// Two redundant copies of a three-step cycle sharing the catalysts. Every combination
/// of at least one reaction per step is a RAF (27 in total).
pub fn example_1() -> ReactionNetwork {
    mk_network(
        &[
            "r1: a1+b1 [{c3}] -> c1",
            "r2: a2+b2 [{c1}] -> c2",
            "r3: a3+b3 [{c2}] -> c3",
            "rp1: ap1+bp1 [{c3}] -> c1",
            "rp2: ap2+bp2 [{c1}] -> c2",
            "rp3: ap3+bp3 [{c2}] -> c3",
        ],
        &[
            "a1", "a2", "a3", "ap1", "ap2", "ap3", "b1", "b2", "b3", "bp1", "bp2", "bp3",
        ],
    )
}

/// Max RAF `{r1, r2, r3, r4}` which is irreducible. No CAF.
pub fn example_9() -> ReactionNetwork {
    mk_network(
        &[
            "r1: f1 + f2 [{g}] -> a",
            "r2: a + f3 [{c}] -> b",
            "r3: b + f4 [{a}] -> c",
            "r4: c + f5 [{b}] -> a + g",
            "r5: b + c [{h}] -> d",
            "r6: e + f6 [{b}] -> h",
            "r7: f5 + h [{c}] -> e",
        ],
        &["f1", "f2", "f3", "f4", "f5", "f6"],
    )
}

/// Every reaction is in the max RAF, `r3` alone is a CAF. Seven RAFs in total.
pub fn custom_0() -> ReactionNetwork {
    mk_network(
        &[
            "r1: 10 + 0 [{01100}] -> 100",
            "r2: 01 + 100 [{0}] -> 01100",
            "r3: 10 + 1 [{0}] -> 101",
            "r4: 11 + 10 [{101}] -> 1110",
            "r5: 1110 + 0 [{101}] -> 11100",
        ],
        &["0", "1", "00", "01", "10", "11"],
    )
}

/// Three RAFs, `r2` is persistent.
pub fn custom_1() -> ReactionNetwork {
    mk_network(
        &[
            "r1: f [{c2}] -> c1",
            "r2: f [{c1}, {c3}] -> c2",
            "r3: f [{c2}] -> c3",
        ],
        &["f"],
    )
}

/// Six RAFs, `r3` is persistent.
pub fn custom_2() -> ReactionNetwork {
    mk_network(
        &[
            "r1: f [{c3}] -> c1",
            "r2: f [{c1}, {c3}] -> c2",
            "r3: f [{c2}, {c4}] -> c3",
            "r4: f [{c2}, {c3}] -> c4",
        ],
        &["f"],
    )
}
