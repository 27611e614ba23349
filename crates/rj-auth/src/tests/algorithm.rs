use crate::{AlgorithmClass, AlgorithmId, classify};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, is_false, is_true};

// =========================================================================
// Classification Tests
// =========================================================================

#[test]
fn given_each_supported_algorithm_when_classified_then_matches_family_table() {
    let expected = [
        ("HS256", AlgorithmClass::Symmetric),
        ("HS384", AlgorithmClass::Symmetric),
        ("HS512", AlgorithmClass::Symmetric),
        ("ES256", AlgorithmClass::AsymmetricEc),
        ("ES384", AlgorithmClass::AsymmetricEc),
        ("ES512", AlgorithmClass::AsymmetricEc),
        ("RS256", AlgorithmClass::AsymmetricRsa),
        ("RS384", AlgorithmClass::AsymmetricRsa),
        ("RS512", AlgorithmClass::AsymmetricRsa),
        ("PS256", AlgorithmClass::AsymmetricRsaPss),
        ("PS384", AlgorithmClass::AsymmetricRsaPss),
        ("PS512", AlgorithmClass::AsymmetricRsaPss),
    ];

    for (name, class) in expected {
        let algorithm = AlgorithmId::parse(name);

        let classification = classify(Some(&algorithm));

        assert_eq!(classification.class, class, "algorithm {name}");
        assert_that!(algorithm.as_str(), eq(name));
    }
}

#[test]
fn given_unrecognized_algorithm_when_classified_then_unknown() {
    for name in ["EdDSA", "hs256", "", "RS1024"] {
        let algorithm = AlgorithmId::parse(name);

        let classification = classify(Some(&algorithm));

        assert_eq!(algorithm, AlgorithmId::Other(name.to_string()));
        assert_eq!(classification.class, AlgorithmClass::Unknown);
    }
}

#[test]
fn given_no_algorithm_when_classified_then_unknown_and_not_symmetric() {
    let classification = classify(None);

    assert_eq!(classification.class, AlgorithmClass::Unknown);
    assert_that!(classification.is_symmetric(), is_false());
    assert_that!(
        classification.explanation,
        contains_substring("Unable to determine JWT algorithm")
    );
}

#[test]
fn given_same_algorithm_when_classified_twice_then_identical_result() {
    for algorithm in AlgorithmId::CHOICES.iter() {
        let first = classify(Some(algorithm));
        let second = classify(Some(algorithm));

        assert_eq!(first, second);
    }
}

#[test]
fn given_hmac_algorithm_when_classified_then_symmetric_with_hmac_explanation() {
    let classification = classify(Some(&AlgorithmId::HS384));

    assert_that!(classification.is_symmetric(), is_true());
    assert_that!(classification.explanation, contains_substring("HMAC"));
}

#[test]
fn given_asymmetric_families_when_classified_then_explanations_name_key_type() {
    assert_that!(
        classify(Some(&AlgorithmId::ES512)).explanation,
        contains_substring("ECDSA")
    );
    assert_that!(
        classify(Some(&AlgorithmId::RS256)).explanation,
        contains_substring("RSA-based")
    );
    assert_that!(
        classify(Some(&AlgorithmId::PS256)).explanation,
        contains_substring("RSASSA-PSS")
    );
}

// =========================================================================
// Choice List Tests
// =========================================================================

#[test]
fn given_choice_list_then_twelve_known_algorithms_in_prompt_order() {
    let choices = AlgorithmId::CHOICES;

    let names: Vec<&str> = choices.iter().map(AlgorithmId::as_str).collect();

    assert_eq!(
        names,
        vec![
            "HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "ES256", "ES384", "ES512",
            "PS256", "PS384", "PS512",
        ]
    );
    assert!(
        choices
            .iter()
            .all(|alg| alg.class() != AlgorithmClass::Unknown)
    );
}
