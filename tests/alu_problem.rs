//! The ALU model: two operands and a function selector of a small arithmetic unit, constrained
//! so that the sum, product and difference of the operands stay within a byte.
use munchkin_domains::engine::propagation::PropagationEngine;
use munchkin_domains::propagators::GreaterThanConstantPropagator;
use munchkin_domains::propagators::LessThanConstantPropagator;
use munchkin_domains::propagators::PlusPropagator;
use munchkin_domains::propagators::TimesPropagator;
use munchkin_domains::DomainId;

struct AluModel {
    engine: PropagationEngine<i32>,
    a: DomainId,
    b: DomainId,
    function: DomainId,
}

impl AluModel {
    fn new() -> AluModel {
        let mut engine = PropagationEngine::default();

        let store = engine.store_mut();
        let a = store.new_named_variable(0, 255, "a");
        let b = store.new_named_variable(0, 255, "b");
        let function = store.new_named_variable(0, 4, "fn");
        let sum = store.new_named_variable(-512, 512, "tmpSum");
        let product = store.new_named_variable(-512, 512, "tmpMul");
        let difference = store.new_named_variable(-512, 512, "tmpDiff");
        let negated = store.new_named_variable(-255, 0, "tmpNeg");
        let zero = store.new_named_variable(0, 0, "zero");

        let _ = engine
            .add_propagator(PlusPropagator::new(a, b, sum))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(LessThanConstantPropagator::new(sum, 255))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(TimesPropagator::new(a, b, product))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(LessThanConstantPropagator::new(product, 255))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(PlusPropagator::new(a, negated, zero))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(PlusPropagator::new(b, negated, difference))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(GreaterThanConstantPropagator::new(difference, 0))
            .expect("consistent at the root");
        let _ = engine
            .add_propagator(LessThanConstantPropagator::new(function, 3))
            .expect("consistent at the root");

        AluModel {
            engine,
            a,
            b,
            function,
        }
    }

    fn decision_variables(&self) -> [DomainId; 3] {
        [self.a, self.b, self.function]
    }

    fn values(&self) -> [i32; 3] {
        self.decision_variables().map(|variable| {
            *self
                .engine
                .store()
                .value(variable)
                .expect("labelled variables are fixed")
        })
    }
}

/// Depth-first search assigning the smallest value first; the refutation branch removes it.
///
/// `on_solution` decides whether the search continues after a solution.
fn label(model: &mut AluModel, on_solution: &mut impl FnMut(&AluModel) -> bool) -> bool {
    if model.engine.propagate().is_err() {
        return false;
    }

    let Some(variable) = model
        .decision_variables()
        .into_iter()
        .find(|&variable| !model.engine.store().is_fixed(variable))
    else {
        return !on_solution(model);
    };
    let value = *model.engine.store().lower_bound(variable);
    let level = model.engine.level();

    model.engine.increase_level();
    if model
        .engine
        .store_mut()
        .narrow_to_value(variable, &value)
        .is_ok()
        && label(model, on_solution)
    {
        return true;
    }
    model.engine.backtrack_to(level);

    model.engine.increase_level();
    if model
        .engine
        .store_mut()
        .remove_value(variable, &value)
        .is_ok()
        && label(model, on_solution)
    {
        return true;
    }
    model.engine.backtrack_to(level);

    false
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn root_propagation_tightens_the_operands() {
    init_logging();
    let model = AluModel::new();
    let store = model.engine.store();

    assert_eq!(store.bounds(model.b).into_bounds(), (1, 254));
    assert_eq!(store.bounds(model.function).into_bounds(), (0, 2));
    assert_eq!(store.bounds(model.a).into_bounds(), (0, 253));
    assert_eq!(store.level(), 0);
}

#[test]
fn first_solution_takes_the_smallest_values() {
    init_logging();
    let mut model = AluModel::new();

    let found = label(&mut model, &mut |_| false);

    assert!(found);
    assert_eq!(model.values(), [0, 1, 0]);

    let store = model.engine.store();
    let sum = store.variable_by_name("tmpSum").expect("named");
    let difference = store.variable_by_name("tmpDiff").expect("named");
    assert_eq!(store.value(sum), Some(&1));
    assert_eq!(store.value(difference), Some(&1));
}

#[test]
fn every_solution_is_found_once() {
    init_logging();
    let mut model = AluModel::new();
    let mut solutions = Vec::new();

    let stopped = label(&mut model, &mut |model| {
        solutions.push(model.values());
        true
    });

    assert!(!stopped);
    assert_eq!(solutions.len(), 2910);
    assert!(solutions
        .iter()
        .all(|&[a, b, function]| a < b && a + b < 255 && a * b < 255 && function < 3));

    solutions.sort_unstable();
    solutions.dedup();
    assert_eq!(solutions.len(), 2910);
    assert_eq!(model.engine.level(), 0);
    assert_eq!(model.engine.store().bounds(model.a).into_bounds(), (0, 253));
}
