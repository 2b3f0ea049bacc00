//! # Validation Tier Tests (T0-T4)
//!
//! If ANY tier fails, the system is INVALID.
//!
//! ## Tiers
//! - T0: Truth-Value Algebra
//! - T1: AtomSpace Storage
//! - T2: Single-Step Rules
//! - T3: Forward Chaining
//! - T4: Pattern Query

use pln_core::{
    AtomSpace, AtomType, Pattern, PlnError, Rule, Termination, TruthValue, Ure, query,
};

const EPS: f32 = 1e-6;

fn high() -> TruthValue {
    TruthValue::new(0.9, 0.8, 10.0)
}

// =============================================================================
// TIER T0: TRUTH-VALUE ALGEBRA
// =============================================================================

mod t0_truth_values {
    use super::*;

    /// T0.1: Construction clamps every field.
    #[test]
    fn construction_clamps() {
        let tv = TruthValue::new(1.5, -0.5, -1.0);
        assert_eq!(
            (tv.strength(), tv.confidence(), tv.count()),
            (1.0, 0.0, 0.0)
        );
    }

    /// T0.2: AND, OR, NOT match the reference values.
    #[test]
    fn algebra_reference_values() {
        let tv1 = TruthValue::new(0.8, 0.9, 5.0);
        let tv2 = TruthValue::new(0.6, 0.7, 3.0);

        let and = tv1.and(tv2);
        assert!((and.strength() - 0.48).abs() < EPS);
        assert!((and.confidence() - 0.63).abs() < EPS);
        assert_eq!(and.count(), 8.0);

        let or = tv1.or(tv2);
        assert!((or.strength() - 0.92).abs() < EPS);
        assert!((or.confidence() - 0.7).abs() < EPS);

        let not = tv1.not();
        assert!((not.strength() - 0.2).abs() < EPS);
        assert_eq!(not.confidence(), 0.9);
        assert_eq!(not.count(), 5.0);
    }

    /// T0.3: Repeating identical evidence does not change belief.
    #[test]
    fn or_merge_idempotent() {
        for tv in [
            TruthValue::new(0.0, 0.0, 0.0),
            TruthValue::new(0.5, 0.5, 2.0),
            TruthValue::new(1.0, 1.0, 100.0),
        ] {
            assert_eq!(tv.or(tv), tv);
        }
    }
}

// =============================================================================
// TIER T1: ATOMSPACE STORAGE
// =============================================================================

mod t1_storage {
    use super::*;

    /// T1.1: A full space refuses further atoms and does not grow.
    #[test]
    fn capacity_bound() {
        let n = 8;
        let mut space = AtomSpace::new(n, 16).expect("space");
        for i in 0..n {
            space
                .create_node(AtomType::ConceptNode, &format!("c{i}"), high())
                .expect("fill");
        }

        let extra = space.create_node(AtomType::ConceptNode, "extra", high());
        assert!(matches!(extra, Err(PlnError::CapacityExceeded { .. })));
        assert_eq!(space.len(), n);
        assert!(space.lookup_by_name("extra").is_none());
    }

    /// T1.2: Name lookup returns the earliest of duplicate names.
    #[test]
    fn first_match_lookup() {
        let mut space = AtomSpace::new(10, 0).expect("space");
        let first = space
            .create_node(AtomType::ConceptNode, "dup", high())
            .expect("first");
        space
            .create_node(AtomType::ConceptNode, "dup", TruthValue::new(0.1, 0.1, 0.0))
            .expect("second");

        assert_eq!(space.lookup_by_name("dup"), Some(first));
    }

    /// T1.3: Links cannot reference atoms of another space.
    #[test]
    fn links_stay_in_their_space() {
        let mut left = AtomSpace::new(10, 0).expect("space");
        let mut right = AtomSpace::new(10, 0).expect("space");
        let l = left.create_node(AtomType::ConceptNode, "L", high()).expect("l");
        let r = right.create_node(AtomType::ConceptNode, "R", high()).expect("r");

        assert!(matches!(
            left.add_inheritance_edge(l, r, high()),
            Err(PlnError::ForeignAtom(_))
        ));
        assert_eq!(left.len(), 1);
    }
}

// =============================================================================
// TIER T2: SINGLE-STEP RULES
// =============================================================================

mod t2_rules {
    use super::*;

    /// T2.1: Transitivity yields (0.81, 0.576).
    #[test]
    fn transitivity_reference_values() {
        let mut space = AtomSpace::new(100, 32).expect("space");
        let a = space.create_node(AtomType::ConceptNode, "A", high()).expect("a");
        let b = space.create_node(AtomType::ConceptNode, "B", high()).expect("b");
        let c = space.create_node(AtomType::ConceptNode, "C", high()).expect("c");
        let ab = space.add_inheritance_edge(a, b, high()).expect("ab");
        let bc = space.add_inheritance_edge(b, c, high()).expect("bc");

        let ac = Rule::inheritance_transitivity()
            .conclusion(&mut space, &[ab, bc])
            .expect("conclude");
        let tv = space.get(ac).expect("ac").tv();
        assert!((tv.strength() - 0.81).abs() < EPS);
        assert!((tv.confidence() - 0.576).abs() < EPS);
    }

    /// T2.2: A failed precondition leaves the space untouched.
    #[test]
    fn unmet_precondition_has_no_effect() {
        let mut space = AtomSpace::new(10, 0).expect("space");
        let p = space.create_node(AtomType::PredicateNode, "P", high()).expect("p");
        let q = space.create_node(AtomType::PredicateNode, "Q", high()).expect("q");

        for rule in [Rule::modus_ponens(), Rule::inheritance_transitivity()] {
            assert!(matches!(
                rule.conclusion(&mut space, &[p, q]),
                Err(PlnError::PreconditionUnmet { .. })
            ));
        }
        assert_eq!(space.len(), 2);
        assert_eq!(space.get(q).expect("q").tv(), high());
    }
}

// =============================================================================
// TIER T3: FORWARD CHAINING
// =============================================================================

mod t3_chaining {
    use super::*;

    /// Animal/Mammal/Dog/Canine scenario.
    fn taxonomy() -> AtomSpace {
        let medium = TruthValue::new(0.7, 0.6, 5.0);
        let mut space = AtomSpace::new(1000, 64).expect("space");
        let animal = space.create_node(AtomType::ConceptNode, "Animal", high()).expect("n");
        let mammal = space.create_node(AtomType::ConceptNode, "Mammal", high()).expect("n");
        let dog = space.create_node(AtomType::ConceptNode, "Dog", high()).expect("n");
        let canine = space.create_node(AtomType::ConceptNode, "Canine", medium).expect("n");
        space.add_inheritance_edge(dog, mammal, high()).expect("l");
        space.add_inheritance_edge(mammal, animal, high()).expect("l");
        space.add_inheritance_edge(dog, canine, medium).expect("l");
        space
    }

    /// T3.1: Nothing applicable means zero on the first pass.
    #[test]
    fn no_applicable_pair_returns_zero() {
        let mut space = AtomSpace::new(10, 0).expect("space");
        let a = space.create_node(AtomType::ConceptNode, "A", high()).expect("a");
        let b = space.create_node(AtomType::ConceptNode, "B", high()).expect("b");
        let c = space.create_node(AtomType::ConceptNode, "C", high()).expect("c");
        space.add_inheritance_edge(a, b, high()).expect("ab");
        space.add_inheritance_edge(a, c, high()).expect("ac");

        let mut ure = Ure::new(&mut space, 10, 0.5);
        ure.add_rule(Rule::inheritance_transitivity());
        ure.add_rule(Rule::modus_ponens());

        let report = ure.run(None);
        assert_eq!(report.inferences, 0);
        assert_eq!(report.iterations, 1);
        assert_eq!(report.termination, Termination::Fixpoint);
    }

    /// T3.2: Chaining terminates within the cap.
    #[test]
    fn terminates_within_cap() {
        let mut space = taxonomy();
        let mut ure = Ure::new(&mut space, 4, 0.0);
        ure.add_rule(Rule::inheritance_transitivity());

        let report = ure.run(None);
        assert!(report.iterations <= 4);
        assert_eq!(report.inferences, report.conclusions.len());
    }

    /// T3.3: Same initial state, same derived sequence.
    #[test]
    fn derivation_is_deterministic() {
        let run = || {
            let mut space = taxonomy();
            let mut ure = Ure::new(&mut space, 5, 0.3);
            ure.add_rule(Rule::inheritance_transitivity());
            ure.add_rule(Rule::modus_ponens());
            let report = ure.run(None);
            let labels: Vec<String> = report
                .conclusions
                .iter()
                .map(|id| ure.space().label(*id))
                .collect();
            (report.inferences, report.termination, labels)
        };

        assert_eq!(run(), run());
    }

    /// T3.4: Conclusions from earlier in an iteration feed later pairs.
    #[test]
    fn fresh_atoms_are_premises_in_same_iteration() {
        let mut space = AtomSpace::new(100, 0).expect("space");
        let p = space.create_node(AtomType::ConceptNode, "P", high()).expect("p");
        let q = space.create_node(AtomType::ConceptNode, "Q", high()).expect("q");
        let r = space.create_node(AtomType::ConceptNode, "R", high()).expect("r");
        let y = space.create_node(AtomType::ConceptNode, "Y", high()).expect("y");
        space.add_inheritance_edge(p, q, high()).expect("pq");
        space.add_inheritance_edge(y, p, high()).expect("yp");
        space.add_inheritance_edge(q, r, high()).expect("qr");

        let mut ure = Ure::new(&mut space, 1, 0.0);
        ure.add_rule(Rule::inheritance_transitivity());
        let report = ure.run(None);

        // P->Q + Q->R gives P->R, which Y->P then extends in the same pass.
        let labels: Vec<String> = report
            .conclusions
            .iter()
            .map(|id| ure.space().label(*id))
            .collect();
        assert_eq!(labels, vec!["P -> R", "Y -> R"]);
    }

    /// T3.5: Modus ponens reinforces the consequent and stops on target.
    #[test]
    fn modus_ponens_target() {
        let mut space = AtomSpace::new(20, 0).expect("space");
        let rain = space
            .create_node(AtomType::PredicateNode, "Rain", TruthValue::new(0.9, 0.9, 3.0))
            .expect("rain");
        let wet = space
            .create_node(AtomType::PredicateNode, "Wet", TruthValue::new(0.2, 0.9, 1.0))
            .expect("wet");
        space
            .add_edge(rain, wet, AtomType::ImplicationLink, TruthValue::new(0.9, 0.9, 3.0))
            .expect("imp");

        let mut ure = Ure::new(&mut space, 10, 0.5);
        ure.add_rule(Rule::modus_ponens());
        assert_eq!(ure.forward_chain(Some(wet)), 1);

        let tv = ure.space().get(wet).expect("wet").tv();
        // derived (0.81, 0.81, 1) OR (0.2, 0.9, 1)
        assert!((tv.strength() - (0.2 + 0.81 - 0.2 * 0.81)).abs() < EPS);
        assert!((tv.confidence() - 0.81).abs() < EPS);
    }
}

// =============================================================================
// TIER T4: PATTERN QUERY
// =============================================================================

mod t4_query {
    use super::*;

    /// T4.1: Type plus confidence filter, creation order.
    #[test]
    fn concept_query() {
        let mut space = AtomSpace::new(10, 0).expect("space");
        let first = space
            .create_node(AtomType::ConceptNode, "x", TruthValue::new(0.5, 0.8, 1.0))
            .expect("x");
        let second = space
            .create_node(AtomType::ConceptNode, "y", TruthValue::new(0.5, 0.8, 1.0))
            .expect("y");
        space
            .create_node(AtomType::ConceptNode, "z", TruthValue::new(0.5, 0.4, 1.0))
            .expect("z");
        space
            .create_node(AtomType::PredicateNode, "p", TruthValue::new(0.5, 0.9, 1.0))
            .expect("p");

        let result = query(&space, &Pattern::of_type(AtomType::ConceptNode));
        assert_eq!(result.count, 2);
        assert_eq!(result.atoms, vec![first, second]);
    }

    /// T4.2: Derived links are visible to queries.
    #[test]
    fn query_sees_derived_links() {
        let mut space = AtomSpace::new(20, 0).expect("space");
        let a = space.create_node(AtomType::ConceptNode, "A", high()).expect("a");
        let b = space.create_node(AtomType::ConceptNode, "B", high()).expect("b");
        let c = space.create_node(AtomType::ConceptNode, "C", high()).expect("c");
        space.add_inheritance_edge(a, b, high()).expect("ab");
        space.add_inheritance_edge(b, c, high()).expect("bc");

        {
            let mut ure = Ure::new(&mut space, 1, 0.5);
            ure.add_rule(Rule::inheritance_transitivity());
            ure.forward_chain(None);
        }

        let result = query(&space, &Pattern::of_type(AtomType::InheritanceLink));
        assert_eq!(result.count, 3);
    }
}
