use u_knapsack::compare::{CompareConfig, CompareRunner};
use u_knapsack::items::{default_capacity, generate, ItemGenConfig, ItemSet};
use u_knapsack::{Algorithm, KnapsackError};

fn three_items() -> ItemSet {
    ItemSet::from_pairs(&[(10, 6), (6, 4), (6, 4)])
}

#[test]
fn three_items_full_capacity() {
    // Items 0 and 1 fill the budget exactly.
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&three_items(), 10).unwrap();
        assert_eq!(result.value, 16, "{algorithm}");
        assert_eq!(result.selected_weight(), 10, "{algorithm}");
    }
}

#[test]
fn three_items_just_under_capacity() {
    // Item 0 no longer fits alongside another item; the two light ones win.
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&three_items(), 9).unwrap();
        assert_eq!(result.value, 12, "{algorithm}");
        assert_eq!(result.selected_weight(), 8, "{algorithm}");
        assert_eq!(result.selected_ids(), vec![1, 2], "{algorithm}");
    }
}

#[test]
fn single_item_heavier_than_capacity() {
    let items = ItemSet::from_pairs(&[(5, 20)]);
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&items, 10).unwrap();
        assert_eq!(result.value, 0, "{algorithm}");
        assert!(result.selected_ids().is_empty(), "{algorithm}");
    }
}

#[test]
fn zero_capacity() {
    let items = generate(&ItemGenConfig::default().with_num_items(8).with_seed(3)).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&items, 0).unwrap();
        assert_eq!(result.value, 0, "{algorithm}");
        assert!(result.selected_ids().is_empty(), "{algorithm}");
    }
}

#[test]
fn invalid_input_is_rejected() {
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            algorithm.solve(&ItemSet::default(), 10),
            Err(KnapsackError::InvalidInput(_))
        ));
        assert!(matches!(
            algorithm.solve(&three_items(), -1),
            Err(KnapsackError::InvalidInput(_))
        ));
    }
}

#[test]
fn overflowing_totals_are_rejected() {
    let values = ItemSet::from_pairs(&[(i64::MAX, 1), (i64::MAX, 1)]);
    let weights = ItemSet::from_pairs(&[(1, i64::MAX), (1, i64::MAX)]);
    for algorithm in Algorithm::ALL {
        assert!(
            matches!(algorithm.solve(&values, 1), Err(KnapsackError::InvalidInput(_))),
            "{algorithm}"
        );
        assert!(
            matches!(algorithm.solve(&weights, 1), Err(KnapsackError::InvalidInput(_))),
            "{algorithm}"
        );
    }
}

#[test]
fn huge_capacity() {
    let items = ItemSet::from_pairs(&[(5, 3)]);
    let capacity = 1i64 << 61;
    for algorithm in Algorithm::ALL {
        let outcome = algorithm.solve(&items, capacity);
        if algorithm == Algorithm::DynamicProgramming {
            assert!(
                matches!(outcome, Err(KnapsackError::InvalidInput(_))),
                "table cannot be allocated"
            );
        } else {
            assert_eq!(outcome.unwrap().value, 5, "{algorithm}");
        }
    }
}

#[test]
fn caller_items_are_never_mutated() {
    let items = three_items();
    let before = items.clone();
    for algorithm in Algorithm::ALL {
        algorithm.solve(&items, 9).unwrap();
        assert_eq!(items, before, "{algorithm}");
    }
}

#[test]
fn generated_instance_comparison() {
    let items = generate(&ItemGenConfig::default().with_num_items(18)).unwrap();
    let capacity = default_capacity(&items);
    let report = CompareRunner::run(&items, capacity, &CompareConfig::default()).unwrap();

    assert!(report.agree(), "{:?}", report.best_values());
    let calls = |algorithm| report.get(algorithm).and_then(|run| run.result()).map(|r| r.calls);
    let exhaustive = calls(Algorithm::Exhaustive).unwrap();
    let bnb = calls(Algorithm::BranchAndBound).unwrap();
    let blocking = calls(Algorithm::Blocking).unwrap();
    assert_eq!(exhaustive, (1 << 19) - 1);
    assert!(bnb <= exhaustive);
    assert!(blocking <= bnb);

    let text = report.to_string();
    assert!(text.contains("# items: 18"));
    assert!(text.contains("*** dynamic-programming ***"));
}
