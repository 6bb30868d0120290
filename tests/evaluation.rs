use fracfunc::evaluation::batchevaluation::evaluate_all;
use fracfunc::function::fractionalform::FractionalForm;
use fracfunc::function::fractionalfunction::{
    EvaluationError,
    FractionalFunction,
    TOLERANCE
};
use fracfunc::function::linearfractionalfunction::LinearFractionalFunction;
use fracfunc::function::quadraticfractionalfunction::QuadraticFractionalFunction;

#[test]
fn linear_concrete_case() {
    let function = LinearFractionalFunction::new(2.0, 5.0, 1.0, -2.0);
    assert_eq!(function.denominator(1.0), -1.0);
    assert_eq!(function.evaluate(1.0), Ok(-7.0));
}

#[test]
fn quadratic_concrete_case() {
    let function = QuadraticFractionalFunction::new(1.0, 2.0, 1.0, 1.0, 0.0, -4.0);
    assert_eq!(function.numerator(1.0), 4.0);
    assert_eq!(function.denominator(1.0), -3.0);
    let value = function.evaluate(1.0).unwrap();
    assert!((value - (-1.3333)).abs() < 1e-4);
}

#[test]
fn linear_failure_case() {
    let function = LinearFractionalFunction::new(2.0, 5.0, 1.0, -2.0);
    match function.evaluate(2.0) {
        Err(EvaluationError::DivisionByNearZero { x, denominator }) => {
            assert_eq!(x, 2.0);
            assert_eq!(denominator, 0.0);
        }
        other => panic!("expected DivisionByNearZero, got {:?}", other),
    }
}

#[test]
fn guard_fires_exactly_below_tolerance() {
    let coefficient_grid = [-3.0, -1.0, -0.5, 0.0, 0.5, 2.0];
    let points = [-2.0, -1.0, 0.0, 0.5, 1.0, 2.0, 3.0];
    for &a1 in coefficient_grid.iter() {
        for &b1 in coefficient_grid.iter() {
            for &b0 in coefficient_grid.iter() {
                let function = FractionalForm::linear(a1, 1.0, b1, b0);
                for &x in points.iter() {
                    let denominator = b1 * x + b0;
                    let result = function.evaluate(x);
                    if denominator.abs() < TOLERANCE {
                        assert!(result.is_err());
                    } else {
                        assert_eq!(result, Ok((a1 * x + 1.0) / denominator));
                    }
                }
            }
        }
    }
}

#[test]
fn heterogeneous_batch_keeps_going() {
    let functions = vec![
        FractionalForm::linear(2.0, 5.0, 1.0, -2.0),
        FractionalForm::quadratic(1.0, 2.0, 3.0, 1.0, 0.0, 1.0),
        FractionalForm::quadratic(1.0, 2.0, 1.0, 1.0, 0.0, -4.0),
        FractionalForm::linear(2.0, 5.0, 1.0, 1.0),
    ];
    let names = ["a", "b", "c", "d"];
    let records = evaluate_all(names.iter().copied().zip(functions.iter()), 2.0);
    let failures: Vec<_> = records.iter().map(|record| record.is_failure()).collect();
    assert_eq!(failures, vec![true, false, true, false]);
    assert_eq!(records[3].value(), Some(3.0));
}
